use super::{KeyCode, PadSpec};

/// Position of an indicator on the board (left-to-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndicatorId(pub usize);

/// On-screen pad with its two markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub key_code: KeyCode,
    pub caption: String,
    pub name: String,
    highlighted: bool,
    visible_since_ms: Option<u64>,
}

impl Indicator {
    pub fn new(spec: &PadSpec) -> Self {
        Self {
            key_code: spec.key_code,
            caption: spec.caption(),
            name: spec.name.clone(),
            highlighted: false,
            visible_since_ms: None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible_since_ms.is_some()
    }

    /// When the visible marker was applied.
    pub fn visible_since_ms(&self) -> Option<u64> {
        self.visible_since_ms
    }

    /// Idempotent.
    pub fn highlight(&mut self) {
        self.highlighted = true;
    }

    /// Returns whether the marker was present.
    pub fn clear_highlight(&mut self) -> bool {
        std::mem::replace(&mut self.highlighted, false)
    }

    /// Apply the visible marker. A second reveal keeps the first timestamp.
    pub fn reveal(&mut self, now_ms: u64) -> bool {
        if self.visible_since_ms.is_some() {
            return false;
        }
        self.visible_since_ms = Some(now_ms);
        true
    }
}

/// All indicators in declaration order.
#[derive(Debug, Clone, Default)]
pub struct IndicatorBoard {
    indicators: Vec<Indicator>,
}

impl IndicatorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, indicator: Indicator) -> IndicatorId {
        self.indicators.push(indicator);
        IndicatorId(self.indicators.len() - 1)
    }

    pub fn get(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.get(id.0)
    }

    pub fn get_mut(&mut self, id: IndicatorId) -> Option<&mut Indicator> {
        self.indicators.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndicatorId, &Indicator)> {
        self.indicators
            .iter()
            .enumerate()
            .map(|(i, indicator)| (IndicatorId(i), indicator))
    }

    pub fn find(&self, key_code: KeyCode) -> Option<IndicatorId> {
        self.indicators
            .iter()
            .position(|i| i.key_code == key_code)
            .map(IndicatorId)
    }

    pub fn highlighted(&self) -> Vec<IndicatorId> {
        self.iter()
            .filter(|(_, i)| i.is_highlighted())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.indicators.iter().filter(|i| i.is_visible()).count()
    }
}
