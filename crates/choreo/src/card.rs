use content::CardRecord;

/// Where a card's link leads, decided once from the authored payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute `http`/`https` reference: the card renders as an anchor that
    /// opens in a new tab and shows the "read more" affordance.
    External(String),
    /// No link, an in-page placeholder (`#`), or a non-web scheme.
    Static,
}

impl LinkTarget {
    pub fn classify(link: Option<&str>) -> Self {
        match link {
            Some(l) if l.starts_with("http") => LinkTarget::External(l.to_string()),
            _ => LinkTarget::Static,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            LinkTarget::External(url) => Some(url),
            LinkTarget::Static => None,
        }
    }

    /// Attributes for the card surface element.
    pub fn anchor_attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            LinkTarget::External(url) => vec![
                ("href", url.clone()),
                ("target", "_blank".to_string()),
                ("rel", "noopener noreferrer".to_string()),
            ],
            LinkTarget::Static => Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        if self.is_interactive() { "a" } else { "div" }
    }
}

pub const READ_MORE_LABEL: &str = "Read Case Study";

/// One card in the stack, fixed at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub payload: CardRecord,
    pub index: usize,
    pub total: usize,
    pub base_rotation_deg: f64,
    pub link: LinkTarget,
}

impl CardDescriptor {
    pub fn deck(records: Vec<CardRecord>) -> Vec<CardDescriptor> {
        let total = records.len();
        records
            .into_iter()
            .enumerate()
            .map(|(index, payload)| CardDescriptor {
                base_rotation_deg: payload.rotation,
                link: LinkTarget::classify(payload.link.as_deref()),
                payload,
                index,
                total,
            })
            .collect()
    }

    pub fn id(&self) -> &str {
        &self.payload.id
    }

    /// Index 0 is topmost.
    pub fn z_index(&self) -> i32 {
        z_index(self.total, self.index)
    }

    pub fn shows_read_more(&self) -> bool {
        self.link.is_interactive()
    }
}

pub fn z_index(total: usize, index: usize) -> i32 {
    (total as i64 - index as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
