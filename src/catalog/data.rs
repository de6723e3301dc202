//! The fixed 2024 reading log. Built once at first use and never mutated;
//! every rendering pass recomputes derived values from this source of truth.

use once_cell::sync::Lazy;

use super::record::BookRecord;

static CATALOG: Lazy<Vec<BookRecord>> = Lazy::new(|| {
    vec![
        book(
            "January",
            "Beyond the Story: 10 Year Record of BTS",
            "Kang Myeong-seok, BTS",
            "Nonfiction",
            "English",
            "12-26-2023",
            "01-02-2024",
            4.0,
            544,
        ),
        book(
            "January",
            "Jujutsu Kaisen #10",
            "Gege Akutami",
            "Fantasy",
            "Japanese",
            "01-03-2024",
            "01-06-2024",
            5.0,
            192,
        ),
        book(
            "January",
            "The Exiled Fleet",
            "J.S. Dewes",
            "Science Fiction",
            "English",
            "01-21-2024",
            "01-27-2024",
            5.0,
            420,
        ),
        book(
            "February",
            "A Court of Thorns and Roses",
            "Sarah J. Maas",
            "Fantasy",
            "English",
            "01-28-2024",
            "02-01-2024",
            4.0,
            419,
        ),
        book(
            "February",
            "Jujutsu Kaisen #11",
            "Gege Akutami",
            "Fantasy",
            "Japanese",
            "02-04-2024",
            "02-04-2024",
            5.0,
            192,
        ),
        book(
            "February",
            "A Court of Mist and Fury",
            "Sarah J. Maas",
            "Fantasy",
            "English",
            "02-02-2024",
            "02-14-2024",
            5.0,
            624,
        ),
    ]
});

/// The full record store, in reading order.
pub fn catalog() -> &'static [BookRecord] {
    &CATALOG
}

#[allow(clippy::too_many_arguments)]
fn book(
    month: &str,
    title: &str,
    author: &str,
    genre: &str,
    language: &str,
    start_date: &str,
    end_date: &str,
    rating: f64,
    pages: u32,
) -> BookRecord {
    BookRecord {
        month: month.into(),
        title: title.into(),
        author: author.into(),
        genre: genre.into(),
        language: language.into(),
        start_date: start_date.into(),
        end_date: end_date.into(),
        rating,
        pages,
    }
}
