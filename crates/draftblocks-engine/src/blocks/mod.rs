use serde::{Serialize, Serializer};

/// Heading depth available to article content.
///
/// Level 2 is reserved for chapter titles supplied by the assembly layer;
/// levels 3 and 4 are the only depths body content can produce. Making the
/// level a closed enum keeps out-of-range depths unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Numeric heading depth (2, 3 or 4).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// HTML tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }

    /// Maps a run of leading `#` characters to a body heading level.
    ///
    /// Only 3 and 4 map; level 2 never comes from chunk content (chapter
    /// titles arrive via the assembly layer) and deeper levels are not
    /// recognized at all.
    pub fn from_hash_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            _ => None,
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// A typed, renderable unit of output content.
///
/// Blocks are immutable once constructed: the `html` field is derived by the
/// variant constructors below and is the exact rendering the consuming layer
/// persists. The serde representation carries a `kind` discriminant
/// (`heading | paragraph | table | orderedList`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: String,
        html: String,
    },
    Paragraph {
        html: String,
    },
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
        html: String,
    },
    OrderedList {
        items: Vec<String>,
        html: String,
    },
}

impl Block {
    /// Builds a heading block. `text` is raw (unformatted) heading text and
    /// is HTML-escaped into the rendering.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        let text = text.into();
        let tag = level.tag();
        let html = format!(
            "<{tag} class=\"wp-block-heading\">{}</{tag}>",
            html_escape::encode_text(&text)
        );
        Block::Heading { level, text, html }
    }

    /// Builds a paragraph block from an already inline-formatted fragment.
    ///
    /// The fragment is wrapped, not re-escaped: inline formatting has
    /// already produced the markup that should land in the document.
    pub fn paragraph(formatted: impl Into<String>) -> Self {
        let html = format!("<p>{}</p>", formatted.into());
        Block::Paragraph { html }
    }

    /// Builds a table block from an optional header row plus body rows.
    /// Cell text is HTML-escaped and never inline-formatted.
    pub fn table(header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        let html = render_table_html(header.as_deref(), &rows);
        Block::Table { header, rows, html }
    }

    /// Builds an ordered-list block from already inline-formatted items.
    pub fn ordered_list(items: Vec<String>) -> Self {
        let mut html = String::from("<ol>");
        for item in &items {
            html.push_str("<li>");
            html.push_str(item);
            html.push_str("</li>");
        }
        html.push_str("</ol>");
        Block::OrderedList { items, html }
    }

    /// The serialized HTML rendering of this block.
    pub fn html(&self) -> &str {
        match self {
            Block::Heading { html, .. }
            | Block::Paragraph { html }
            | Block::Table { html, .. }
            | Block::OrderedList { html, .. } => html,
        }
    }
}

fn render_table_html(header: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut html = String::from("<figure class=\"wp-block-table\"><table>");

    if let Some(cells) = header {
        html.push_str("<thead><tr>");
        for cell in cells {
            html.push_str("<th>");
            html.push_str(&html_escape::encode_text(cell));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead>");
    }

    if !rows.is_empty() {
        html.push_str("<tbody>");
        for row in rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&html_escape::encode_text(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
    }

    html.push_str("</table></figure>");
    html
}
