//! End-to-end coverage: raw draft sources through assembly and
//! serialization.

use draftblocks_engine::{
    ArticleOutline, Block, ChapterSource, assemble_article, extract_chapter_title,
    serialize_blocks,
};
use pretty_assertions::assert_eq;

const LEAD: &str = "This article walks through the ==essentials== of draft publishing.";

const CHAPTER_ONE: &str = "\
## Getting Started

Before anything else, install the `toolchain`.

1. download the installer
2. run it with **admin** rights

### Troubleshooting

| Symptom | Fix |
|---|---|
| no output | check the path |
| wrong version | reinstall |";

const SUMMARY: &str = "That covers the whole flow.\nSee the next article for more.";

#[test]
fn full_article_flow_produces_ordered_typed_blocks() {
    let title = extract_chapter_title(CHAPTER_ONE).unwrap();
    assert_eq!(title, "Getting Started");

    let chapters = vec![ChapterSource {
        title,
        body: CHAPTER_ONE.to_string(),
    }];
    let blocks = assemble_article(LEAD, &chapters, SUMMARY);

    // lead para, chapter title, chapter para, list, H3, table, summary para
    assert_eq!(blocks.len(), 7);
    assert!(matches!(&blocks[0], Block::Paragraph { .. }));
    assert!(matches!(&blocks[1], Block::Heading { .. }));
    assert!(matches!(&blocks[2], Block::Paragraph { .. }));
    assert!(matches!(&blocks[3], Block::OrderedList { .. }));
    assert!(matches!(&blocks[4], Block::Heading { .. }));
    assert!(matches!(&blocks[5], Block::Table { .. }));
    assert!(matches!(&blocks[6], Block::Paragraph { .. }));

    assert_eq!(
        blocks[0].html(),
        "<p>This article walks through the <mark>essentials</mark> of draft publishing.</p>"
    );
    assert_eq!(
        blocks[1].html(),
        "<h2 class=\"wp-block-heading\">Getting Started</h2>"
    );
    assert_eq!(
        blocks[6].html(),
        "<p>That covers the whole flow.<br>See the next article for more.</p>"
    );
}

#[test]
fn chapter_body_does_not_duplicate_its_own_title() {
    let chapters = vec![ChapterSource {
        title: "Getting Started".to_string(),
        body: CHAPTER_ONE.to_string(),
    }];
    let blocks = assemble_article("", &chapters, "");

    let h2_count = blocks
        .iter()
        .filter(|b| matches!(b, Block::Heading { level, .. } if level.as_u8() == 2))
        .count();
    assert_eq!(h2_count, 1);
}

#[test]
fn serialized_article_round_trips_block_order() {
    let chapters = vec![ChapterSource {
        title: "Getting Started".to_string(),
        body: CHAPTER_ONE.to_string(),
    }];
    let blocks = assemble_article(LEAD, &chapters, SUMMARY);
    let document = serialize_blocks(&blocks);

    let heading_pos = document.find("<!-- wp:heading {\"level\":2} -->").unwrap();
    let list_pos = document.find("<!-- wp:list {\"ordered\":true} -->").unwrap();
    let table_pos = document.find("<!-- wp:table -->").unwrap();
    assert!(heading_pos < list_pos && list_pos < table_pos);

    // One serialized comment pair per block.
    assert_eq!(document.matches("<!-- wp:").count(), blocks.len());
    assert_eq!(document.matches("<!-- /wp:").count(), blocks.len());
}

#[test]
fn outline_metadata_complements_assembly() {
    let outline = ArticleOutline::parse(
        "# Draft Publishing, End to End\nmeta_description: \"From markdown drafts to typed blocks\"",
    );
    assert_eq!(outline.title, "Draft Publishing, End to End");
    assert_eq!(outline.meta_description, "From markdown drafts to typed blocks");
}
