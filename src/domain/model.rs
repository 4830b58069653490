use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 頁面狀態模型。控制器只改動這個結構，呈現層再把它投影到實際畫面。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 目前網址，可以是完整 URL 或只有路徑
    pub location: String,
    pub has_hamburger: bool,
    pub nav_menu: Option<NavMenu>,
    pub dropdowns: Vec<Dropdown>,
    pub faq_items: Vec<FaqItem>,
    pub contact_form: Option<ContactForm>,
    pub filters: FilterControls,
    pub listings: Vec<ListingCard>,
    pub contact_buttons: Vec<ContactButton>,
    pub anchors: Vec<AnchorLink>,
    pub element_ids: Vec<String>,
    pub reveal_targets: Vec<RevealTarget>,
    pub head_styles: Vec<String>,
}

impl Page {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn has_element_id(&self, id: &str) -> bool {
        self.element_ids.iter().any(|existing| existing == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavMenu {
    pub links: Vec<NavLink>,
    /// 行動版選單是否展開 (`.nav-menu.active`)
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: Option<String>,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            label: label.into(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub label: String,
    /// 沒有 `.dropdown-menu` 的容器不綁定事件
    pub has_menu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVisibility {
    Shown,
    Hidden,
}

impl MenuVisibility {
    pub fn display(&self) -> &'static str {
        match self {
            MenuVisibility::Shown => "flex",
            MenuVisibility::Hidden => "none",
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            MenuVisibility::Shown => "1",
            MenuVisibility::Hidden => "0",
        }
    }

    pub fn visibility(&self) -> &'static str {
        match self {
            MenuVisibility::Shown => "visible",
            MenuVisibility::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: Option<String>,
    pub open: bool,
}

impl FaqItem {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            open: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    /// reset 時還原的值
    pub initial: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
}

impl ContactForm {
    pub fn with_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names
                .into_iter()
                .map(|name| FormField {
                    name: name.to_string(),
                    value: String::new(),
                    initial: String::new(),
                })
                .collect(),
        }
    }

    /// 依欄位名稱取值，同名欄位以最後一個為準
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().rev().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.initial.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterControl {
    Location,
    MinPrice,
    MaxPrice,
}

/// 篩選控制項的目前值。`None` 表示頁面上沒有該控制項。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterControls {
    /// `.filter-group` 內是否有 input/select 可綁定 change 事件
    pub bound: bool,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FilterControls {
    pub fn control_mut(&mut self, control: FilterControl) -> &mut Option<String> {
        match control {
            FilterControl::Location => &mut self.location,
            FilterControl::MinPrice => &mut self.min_price,
            FilterControl::MaxPrice => &mut self.max_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCard {
    pub title: String,
    /// `data-location`
    pub location: Option<String>,
    /// `data-price`，原始字串
    pub price: Option<String>,
    pub visible: bool,
}

impl ListingCard {
    pub fn new(title: impl Into<String>, location: &str, price: &str) -> Self {
        Self {
            title: title.into(),
            location: Some(location.to_string()),
            price: Some(price.to_string()),
            visible: true,
        }
    }

    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContactAction {
    /// `data-whatsapp` + optional `data-message`
    WhatsApp {
        phone: String,
        message: Option<String>,
    },
    /// `data-call`
    Call { phone: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactButton {
    pub label: String,
    /// 同一元素可同時有 WhatsApp 與撥號，點擊時依序執行
    pub actions: Vec<ContactAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorLink {
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Service,
    Testimonial,
    Blog,
    Listing,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::Service,
        CardKind::Testimonial,
        CardKind::Blog,
        CardKind::Listing,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            CardKind::Service => "service-card",
            CardKind::Testimonial => "testimonial-card",
            CardKind::Blog => "blog-card",
            CardKind::Listing => "listing-card",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineStyle {
    pub opacity: Option<String>,
    pub transform: Option<String>,
    pub transition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    pub kind: CardKind,
    pub style: InlineStyle,
    pub revealed: bool,
}

impl RevealTarget {
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            style: InlineStyle::default(),
            revealed: false,
        }
    }
}

/// 對應 IntersectionObserver 回呼中的單一 entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// `Page::reveal_targets` 的索引
    pub target: usize,
    pub intersection_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "#4CAF50",
            ToastKind::Error => "#f44336",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class_name(&self) -> String {
        format!("message {}", self.kind.as_str())
    }

    pub fn inline_style(&self) -> String {
        let animation = match self.phase {
            ToastPhase::Showing => "slideIn 0.3s ease",
            ToastPhase::Leaving => "slideOut 0.3s ease",
        };
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 4px; \
             background-color: {}; color: white; z-index: 10000; animation: {};",
            self.kind.background(),
            animation
        )
    }
}

/// 送往表單 webhook 的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationRequest {
    /// `window.open(url, '_blank')`
    OpenNewContext { url: String },
    /// `window.location.href = url`
    Assign { url: String },
    ScrollIntoView { target_id: String, smooth: bool },
}
