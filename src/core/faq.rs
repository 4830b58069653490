use crate::domain::model::FaqItem;

/// 點擊第 `index` 個問題：關閉其他項目並切換自己。沒有問題元素的項目不回應。
pub fn toggle_item(items: &mut [FaqItem], index: usize) -> bool {
    match items.get(index) {
        Some(item) if item.question.is_some() => {}
        _ => return false,
    }

    for (i, item) in items.iter_mut().enumerate() {
        if i == index {
            item.open = !item.open;
        } else {
            item.open = false;
        }
    }
    true
}

pub fn open_item(items: &[FaqItem]) -> Option<usize> {
    items.iter().position(|item| item.open)
}
