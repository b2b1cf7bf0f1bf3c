//! Paragraph stream with heading context

/// Heading assigned to paragraphs that precede the first heading
pub const NO_HEADING: &str = "No Heading";

/// One body block of a Word document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Raw text of the block (untrimmed)
    pub text: String,
    /// Resolved paragraph style name, e.g. "Heading 1" or "Normal"
    pub style: Option<String>,
}

impl Block {
    /// Create a block with an optional style name
    pub fn new(text: impl Into<String>, style: Option<&str>) -> Self {
        Self {
            text: text.into(),
            style: style.map(str::to_string),
        }
    }

    /// Whether the block is styled as any heading variant
    pub fn is_heading(&self) -> bool {
        self.style
            .as_deref()
            .map_or(false, |name| name.starts_with("Heading"))
    }
}

/// A non-empty paragraph and the nearest heading at or above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Trimmed paragraph text, never empty
    pub text: String,
    /// Trimmed text of the governing heading, or [`NO_HEADING`]
    pub heading: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading: heading.into(),
        }
    }
}

/// Turn blocks into paragraphs, tracking the current heading
///
/// Heading blocks update the current heading before being emitted, so a
/// heading paragraph carries itself as heading. Heading blocks with no text
/// keep the previous heading. Blocks that are empty after trimming are
/// dropped.
pub fn extract<I>(blocks: I) -> Vec<Paragraph>
where
    I: IntoIterator<Item = Block>,
{
    let (_, paragraphs) = blocks.into_iter().fold(
        (NO_HEADING.to_string(), Vec::new()),
        |(heading, mut paragraphs), block| {
            let text = block.text.trim();

            let heading = if block.is_heading() && !text.is_empty() {
                text.to_string()
            } else {
                heading
            };

            if !text.is_empty() {
                paragraphs.push(Paragraph::new(text, heading.as_str()));
            }

            (heading, paragraphs)
        },
    );

    paragraphs
}
