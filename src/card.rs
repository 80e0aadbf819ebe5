use std::fmt;
use std::sync::Arc;

/// Stable identifier of a card, usually the asset path it was collected from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(Arc<str>);

impl CardId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A single card face. Cheap to clone, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    image: Arc<str>,
}

impl Card {
    pub fn new(id: impl Into<CardId>, image: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Resolved display reference (URL or path) for the card's front face.
    pub fn image(&self) -> &str {
        &self.image
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_exposes_id_and_image() {
        let card = Card::new("./assets/cards/ace.png", "/assets/ace-1f3a.png");
        assert_eq!(card.id().as_str(), "./assets/cards/ace.png");
        assert_eq!(card.image(), "/assets/ace-1f3a.png");
        assert_eq!(card.to_string(), "./assets/cards/ace.png");
    }

    #[test]
    fn clones_share_identity() {
        let card = Card::new("a", "a.png");
        assert_eq!(card.clone(), card);
    }
}
