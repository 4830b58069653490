use crate::core::dropdown::{DropdownController, DropdownView};
use crate::core::filters::{self, FilterCriteria};
use crate::core::scroll_reveal::{self, RevealSettings};
use crate::core::toast::{ToastBoard, TOAST_KEYFRAMES};
use crate::core::{anchors, contact_buttons, contact_form, faq, navigation};
use crate::domain::model::{FilterControl, IntersectionEntry, Page, Toast, ToastKind};
use crate::domain::ports::{ConfigProvider, FormSubmitter, Navigator};
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    HamburgerClick,
    NavLinkClick(usize),
    DropdownEnter(usize),
    DropdownLeave(usize),
    FaqQuestionClick(usize),
    /// 使用者在表單欄位輸入
    FormInput { name: String, value: String },
    ContactFormSubmit,
    FilterChange { control: FilterControl, value: String },
    ContactButtonClick(usize),
    AnchorClick(usize),
    Intersection(Vec<IntersectionEntry>),
}

impl FromStr for PageEvent {
    type Err = SiteError;

    /// `hamburger`, `submit`, `nav:1`, `enter:0`, `leave:0`, `faq:2`, `button:0`,
    /// `anchor:0`, `reveal:3`, `reveal:3:0.05`, `field:name=Ann`
    fn from_str(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| SiteError::InvalidConfigValueError {
            field: "event".to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };
        let index = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| invalid("expected an element index"))
        };

        let (kind, arg) = raw.split_once(':').unwrap_or((raw, ""));
        match kind {
            "hamburger" => Ok(PageEvent::HamburgerClick),
            "submit" => Ok(PageEvent::ContactFormSubmit),
            "nav" => Ok(PageEvent::NavLinkClick(index(arg)?)),
            "enter" => Ok(PageEvent::DropdownEnter(index(arg)?)),
            "leave" => Ok(PageEvent::DropdownLeave(index(arg)?)),
            "faq" => Ok(PageEvent::FaqQuestionClick(index(arg)?)),
            "button" => Ok(PageEvent::ContactButtonClick(index(arg)?)),
            "anchor" => Ok(PageEvent::AnchorClick(index(arg)?)),
            "reveal" => {
                let (target, ratio) = arg.split_once(':').unwrap_or((arg, "1"));
                let intersection_ratio = ratio
                    .parse::<f64>()
                    .map_err(|_| invalid("expected an intersection ratio"))?;
                Ok(PageEvent::Intersection(vec![IntersectionEntry {
                    target: index(target)?,
                    intersection_ratio,
                }]))
            }
            "field" => {
                let (name, value) = arg
                    .split_once('=')
                    .ok_or_else(|| invalid("expected field:<name>=<value>"))?;
                Ok(PageEvent::FormInput {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
            _ => Err(invalid("unknown event kind")),
        }
    }
}

/// 事件處理結果
#[derive(Debug, Default)]
pub struct EventOutcome {
    /// 是否有對應的事件處理器
    pub handled: bool,
    pub default_prevented: bool,
    /// 表單送出的背景工作
    pub submission: Option<JoinHandle<()>>,
}

impl EventOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled(handled: bool) -> Self {
        Self {
            handled,
            ..Self::default()
        }
    }

    fn prevented() -> Self {
        Self {
            handled: true,
            default_prevented: true,
            submission: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub current_page: String,
    pub dom_ready: bool,
    pub loaded: bool,
    pub filter: FilterCriteria,
    pub page: Page,
    pub dropdowns: Vec<DropdownView>,
    pub toasts: Vec<Toast>,
}

pub struct PageController<N: Navigator, C: ConfigProvider> {
    page: Page,
    config: C,
    navigator: N,
    submitter: Arc<dyn FormSubmitter>,
    toasts: ToastBoard,
    dropdowns: Vec<Option<DropdownController>>,
    reveal: RevealSettings,
    dom_ready: bool,
    loaded: bool,
}

impl<N: Navigator, C: ConfigProvider> PageController<N, C> {
    /// 對應腳本執行當下：注入動畫樣式，綁定頁內錨點
    pub fn new(mut page: Page, config: C, navigator: N, submitter: Arc<dyn FormSubmitter>) -> Self {
        page.head_styles.push(TOAST_KEYFRAMES.to_string());

        let toasts = ToastBoard::new(config.toast_lifetime(), config.toast_exit_animation());
        let reveal = RevealSettings {
            threshold: config.reveal_threshold(),
            offset_px: config.reveal_offset_px(),
            transition: config.reveal_transition().to_string(),
        };

        Self {
            page,
            config,
            navigator,
            submitter,
            toasts,
            dropdowns: Vec::new(),
            reveal,
            dom_ready: false,
            loaded: false,
        }
    }

    /// DOMContentLoaded：導覽列、下拉選單、active 連結
    pub fn on_dom_ready(&mut self) {
        if self.dom_ready {
            return;
        }

        let delay = self.config.dropdown_hide_delay();
        self.dropdowns = self
            .page
            .dropdowns
            .iter()
            .map(|dropdown| {
                dropdown
                    .has_menu
                    .then(|| DropdownController::new(dropdown.label.clone(), delay))
            })
            .collect();

        let location = self.page.location.clone();
        if let Some(menu) = self.page.nav_menu.as_mut() {
            navigation::set_active_nav(menu, &location, self.config.default_page());
        }

        self.dom_ready = true;
        tracing::info!(
            "Navigation ready: {} links, {} dropdowns",
            self.page.nav_menu.as_ref().map_or(0, |m| m.links.len()),
            self.dropdowns.iter().flatten().count()
        );
    }

    /// window load：FAQ、表單、篩選、聯絡按鈕、捲動動畫
    pub fn on_load(&mut self) {
        if self.loaded {
            return;
        }

        scroll_reveal::prepare(&mut self.page.reveal_targets, &self.reveal);
        self.loaded = true;

        tracing::info!(
            "Page behaviors ready: {} FAQ items, form={}, {} listings, {} contact buttons, {} reveal targets",
            self.page.faq_items.len(),
            self.page.contact_form.is_some(),
            self.page.listings.len(),
            self.page.contact_buttons.len(),
            self.page.reveal_targets.len()
        );
    }

    /// 必須在 tokio runtime 內呼叫：表單送出、下拉選單延遲隱藏與 toast 都會 spawn 背景工作
    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        tracing::debug!("Dispatching {:?}", event);
        match event {
            PageEvent::HamburgerClick if self.dom_ready => {
                EventOutcome::handled(navigation::toggle_menu(&mut self.page))
            }
            PageEvent::NavLinkClick(index) if self.dom_ready => EventOutcome::handled(
                navigation::follow_nav_link(&mut self.page, index, self.config.default_page()),
            ),
            PageEvent::DropdownEnter(index) => match self.dropdown_mut(index) {
                Some(dropdown) => {
                    dropdown.pointer_enter();
                    EventOutcome::handled(true)
                }
                None => EventOutcome::ignored(),
            },
            PageEvent::DropdownLeave(index) => match self.dropdown_mut(index) {
                Some(dropdown) => {
                    dropdown.pointer_leave();
                    EventOutcome::handled(true)
                }
                None => EventOutcome::ignored(),
            },
            PageEvent::FaqQuestionClick(index) if self.loaded => {
                EventOutcome::handled(faq::toggle_item(&mut self.page.faq_items, index))
            }
            PageEvent::FormInput { name, value } => match self.page.contact_form.as_mut() {
                Some(form) => EventOutcome::handled(form.set(&name, value)),
                None => EventOutcome::ignored(),
            },
            PageEvent::ContactFormSubmit if self.loaded => self.submit_contact_form(),
            PageEvent::FilterChange { control, value } => self.change_filter(control, value),
            PageEvent::ContactButtonClick(index) if self.loaded => {
                let Some(button) = self.page.contact_buttons.get(index) else {
                    return EventOutcome::ignored();
                };
                for action in &button.actions {
                    let request =
                        contact_buttons::navigation_for(action, self.config.whatsapp_message());
                    self.navigator.navigate(request);
                }
                EventOutcome::prevented()
            }
            PageEvent::AnchorClick(index) => {
                let Some(anchor) = self.page.anchors.get(index) else {
                    return EventOutcome::ignored();
                };
                if let Some(request) = anchors::scroll_request(&self.page, &anchor.href) {
                    self.navigator.navigate(request);
                }
                EventOutcome::prevented()
            }
            PageEvent::Intersection(entries) if self.loaded => {
                let revealed =
                    scroll_reveal::observe(&mut self.page.reveal_targets, &entries, &self.reveal);
                tracing::debug!("Revealed {} elements", revealed);
                EventOutcome::handled(true)
            }
            _ => {
                tracing::debug!("No listener attached yet, event ignored");
                EventOutcome::ignored()
            }
        }
    }

    fn dropdown_mut(&mut self, index: usize) -> Option<&mut DropdownController> {
        self.dropdowns.get_mut(index).and_then(Option::as_mut)
    }

    fn change_filter(&mut self, control: FilterControl, value: String) -> EventOutcome {
        let slot = self.page.filters.control_mut(control);
        let Some(current) = slot.as_mut() else {
            return EventOutcome::ignored();
        };
        *current = value;

        if !(self.loaded && self.page.filters.bound) {
            return EventOutcome::ignored();
        }

        let criteria = FilterCriteria::read(&self.page.filters);
        filters::apply(&mut self.page.listings, &criteria);
        EventOutcome::handled(true)
    }

    fn submit_contact_form(&mut self) -> EventOutcome {
        let Some(form) = self.page.contact_form.as_mut() else {
            return EventOutcome::ignored();
        };
        let values = form.values();

        if let Err(e) = contact_form::validate_submission(&values) {
            tracing::debug!("Contact form rejected: {}", e);
            self.toasts.show(e.user_friendly_message(), ToastKind::Error);
            return EventOutcome::prevented();
        }

        let payload = contact_form::build_payload(&values, &chrono::Local::now());
        let submission = tokio::spawn(contact_form::deliver(Arc::clone(&self.submitter), payload));

        self.toasts
            .show(contact_form::SUCCESS_MESSAGE, ToastKind::Success);
        form.reset();

        EventOutcome {
            handled: true,
            default_prevented: true,
            submission: Some(submission),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn toasts(&self) -> &ToastBoard {
        &self.toasts
    }

    pub fn dropdown(&self, index: usize) -> Option<&DropdownController> {
        self.dropdowns.get(index).and_then(Option::as_ref)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_page: navigation::current_page(&self.page.location, self.config.default_page()),
            dom_ready: self.dom_ready,
            loaded: self.loaded,
            filter: FilterCriteria::read(&self.page.filters),
            page: self.page.clone(),
            dropdowns: self.dropdowns.iter().flatten().map(DropdownController::view).collect(),
            toasts: self.toasts.active(),
        }
    }
}
