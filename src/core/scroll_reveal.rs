use crate::domain::model::{InlineStyle, IntersectionEntry, RevealTarget};

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSettings {
    pub threshold: f64,
    pub offset_px: u32,
    pub transition: String,
}

impl RevealSettings {
    fn hidden_style(&self) -> InlineStyle {
        InlineStyle {
            opacity: Some("0".to_string()),
            transform: Some(format!("translateY({}px)", self.offset_px)),
            transition: Some(self.transition.clone()),
        }
    }
}

/// 所有卡片先隱藏並下移，交給觀察者處理
pub fn prepare(targets: &mut [RevealTarget], settings: &RevealSettings) {
    for target in targets.iter_mut() {
        target.style = settings.hidden_style();
        target.revealed = false;
    }
}

/// 處理一批 intersection entries，回傳本次新顯示的數量。顯示後不會再隱藏。
pub fn observe(
    targets: &mut [RevealTarget],
    entries: &[IntersectionEntry],
    settings: &RevealSettings,
) -> usize {
    let mut revealed = 0;
    for entry in entries {
        let intersecting =
            entry.intersection_ratio > 0.0 && entry.intersection_ratio >= settings.threshold;
        if !intersecting {
            continue;
        }
        let Some(target) = targets.get_mut(entry.target) else {
            tracing::debug!("Intersection for unknown target {}", entry.target);
            continue;
        };
        if target.revealed {
            continue;
        }

        target.style.opacity = Some("1".to_string());
        target.style.transform = Some("translateY(0)".to_string());
        target.revealed = true;
        revealed += 1;
    }
    revealed
}
