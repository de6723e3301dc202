//! Static per-title content: cover image paths and summary prose. Looked up
//! by title and paired with filtered records by one generic routine, so the
//! presentation layer renders every book panel through the same path.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::record::BookRecord;

/// Opaque display content keyed by title. The core never validates or
/// generates these; it only hands them to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookContent {
    pub title: String,
    pub cover_image: String,
    pub summary: String,
}

/// A filtered record joined with its content entry, ready for one
/// expander-style panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPanel {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub language: String,
    pub pages: u32,
    pub cover_image: String,
    pub summary: String,
}

static CONTENT: Lazy<Vec<BookContent>> = Lazy::new(|| {
    vec![
        entry(
            "Beyond the Story: 10 Year Record of BTS",
            "img/bts_book.png",
            "BTS shares personal, behind-the-scenes stories of their journey so far through interviews and more than three years of in-depth coverage by Myeongseok Kang, who has written about K-pop and other Korean pop culture in various media. Presented chronologically in seven chapters from before the debut of BTS to the present, their vivid voices and opinions harmonize to tell a sincere, lively, and deep story. In individual interviews that have been conducted without a camera or makeup, they illuminate their musical journey from multiple angles and discuss its significance.",
        ),
        entry(
            "Jujutsu Kaisen #10",
            "img/jjk_10.jpg",
            "In order to regain use of his crippled body, Kokichi Muta, otherwise known as Mechamaru, has been acting as an informant for the cursed spirits. He’s prepared for the betrayal when he’s thrust into a battle to the death against Mahito, but is knowing his enemy enough against a cursed spirit whose powers keep growing exponentially?",
        ),
        entry(
            "The Exiled Fleet",
            "img/tef_book.jpg",
            "The Sentinels narrowly escaped the collapsing edge of the Divide. They have mustered a few other surviving Sentinels, but with no engines they have no way to leave the edge of the universe before they starve. Adequin Rake has gathered a team to find the materials they'll need to get everyone out.",
        ),
        entry(
            "A Court of Thorns and Roses",
            "img/acotar_book.jpg",
            "When nineteen-year-old huntress Feyre kills a wolf in the woods, a terrifying creature arrives to demand retribution. Dragged to a treacherous magical land she knows about only from legends, Feyre discovers that her captor is not truly a beast, but one of the lethal, immortal faeries who once ruled her world.",
        ),
        entry(
            "Jujutsu Kaisen #11",
            "img/jjk_11.jpg",
            "Despite the crowd of civilians and transfigured humans, Satoru Gojo is able to defeat the cursed spirits at Shibuya Station. But it's a trap! The cursed spirits possess a special item that can even seal the all-powerful Gojo! Meanwhile, an unlikely ally suddenly contacts Yuji Itadori, who is on his way to the station!",
        ),
    ]
});

/// Content entry for a title, if any was authored.
pub fn content_for(title: &str) -> Option<&'static BookContent> {
    CONTENT.iter().find(|c| c.title == title)
}

/// Join each filtered record with its content entry, in record order. Records
/// without authored content simply produce no panel.
pub fn panels_for(records: &[BookRecord]) -> Vec<BookPanel> {
    records
        .iter()
        .filter_map(|record| {
            let content = content_for(&record.title)?;
            Some(BookPanel {
                title: record.title.clone(),
                author: record.author.clone(),
                genre: record.genre.clone(),
                language: record.language.clone(),
                pages: record.pages,
                cover_image: content.cover_image.clone(),
                summary: content.summary.clone(),
            })
        })
        .collect()
}

fn entry(title: &str, cover_image: &str, summary: &str) -> BookContent {
    BookContent {
        title: title.into(),
        cover_image: cover_image.into(),
        summary: summary.into(),
    }
}
