use crate::{
    flags::FeatureFlags,
    readiness::ReadinessGate,
    routing::{strip_base, Location, NavigationIntent, Query, Resolver},
    Error,
};
use leptos::{prelude::*, task::spawn_local};
use std::{fmt, ops::Deref, str::FromStr};
use tracing::debug;

/// Reactive view of the [`ReadinessGate`]. Flips to `true` once and stays there.
#[derive(Copy, Clone, Debug)]
pub struct Readiness {
    pub ready: ReadSignal<bool>,
}

impl Readiness {
    /// Must be called inside a reactive owner; spawns a local task that waits on the gate.
    pub fn new(gate: ReadinessGate) -> Self {
        let (ready, set_ready) = signal(gate.is_ready());

        if !gate.is_ready() {
            spawn_local(async move {
                gate.wait().await;
                debug!("readiness gate opened");
                set_ready.set(true);
            });
        }

        Self { ready }
    }
}

impl Deref for Readiness {
    type Target = ReadSignal<bool>;

    fn deref(&self) -> &Self::Target {
        &self.ready
    }
}

/// Resolved intent for the current location, or `None` until `readiness` opens.
///
/// `pathname` is the browser pathname including `base`. Once ready the memo never returns to `None`.
pub fn navigation_intent(
    readiness: Readiness,
    resolver: Resolver,
    pathname: Signal<String>,
    search: Signal<String>,
    base: &'static str,
) -> Memo<Option<NavigationIntent>> {
    Memo::new(move |_| {
        readiness.get().then(|| {
            pathname.with(|pathname| {
                search.with(|search| {
                    resolver.resolve(&Location::new(strip_base(pathname, base), Query::parse(search)))
                })
            })
        })
    })
}

#[derive(Copy, Clone, Debug)]
pub struct Flags(pub RwSignal<FeatureFlags>);

impl Flags {
    pub fn new(flags: FeatureFlags) -> Self {
        Self(RwSignal::new(flags))
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new(FeatureFlags::default())
    }
}

impl Deref for Flags {
    type Target = RwSignal<FeatureFlags>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub id: u64,
    pub kind: PopupKind,
    pub message: String,
}

/// Popups in the order they were raised. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupQueue {
    next_id: u64,
    popups: Vec<Popup>,
}

impl PopupQueue {
    pub fn push(&mut self, kind: PopupKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.popups.push(Popup {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns `false` if `id` was already dismissed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.popups.len();
        self.popups.retain(|popup| popup.id != id);
        self.popups.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Popup> {
        self.popups.iter()
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Popups(pub RwSignal<PopupQueue>);

impl Popups {
    pub fn push(&self, kind: PopupKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.0.update(|queue| id = queue.push(kind, message));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl Default for Popups {
    fn default() -> Self {
        Self(RwSignal::new(PopupQueue::default()))
    }
}

impl Deref for Popups {
    type Target = RwSignal<PopupQueue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

impl ModalContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The single top-level modal. Opening a new one replaces the current content.
#[derive(Copy, Clone, Debug)]
pub struct ModalSlot(pub RwSignal<Option<ModalContent>>);

impl ModalSlot {
    pub fn open(&self, content: ModalContent) {
        self.0.set(Some(content));
    }

    pub fn close(&self) {
        if self.0.with_untracked(Option::is_some) {
            self.0.set(None);
        }
    }
}

impl Default for ModalSlot {
    fn default() -> Self {
        Self(RwSignal::new(None))
    }
}

impl Deref for ModalSlot {
    type Target = RwSignal<Option<ModalContent>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}
