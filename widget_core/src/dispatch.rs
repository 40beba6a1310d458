//! Event binding table
//!
//! Maps `(control, event)` pairs to handlers so the full behavior surface
//! can be enumerated without a live document.

/// Element that receives host events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Document,
    Accept,
    Evasive,
}

impl Control {
    pub fn role(self) -> &'static str {
        match self {
            Control::Document => "document",
            Control::Accept => "accept",
            Control::Evasive => "evasive",
        }
    }
}

/// Host event kinds the widget listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    PointerEnter,
    TouchStart,
    Click,
}

impl EventKind {
    /// DOM event type name
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Ready => "DOMContentLoaded",
            EventKind::PointerEnter => "mouseover",
            EventKind::TouchStart => "touchstart",
            EventKind::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Start,
    Accept,
    Evade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub control: Control,
    pub kind: EventKind,
    pub handler: Handler,
    pub prevent_default: bool,
}

impl Binding {
    pub const fn new(control: Control, kind: EventKind, handler: Handler) -> Self {
        Self {
            control,
            kind,
            handler,
            prevent_default: false,
        }
    }

    pub const fn preventing_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DispatchTable {
    bindings: Vec<Binding>,
}

impl DispatchTable {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding, replacing any existing one for the same control and event
    pub fn bind(&mut self, binding: Binding) {
        match self
            .bindings
            .iter_mut()
            .find(|b| b.control == binding.control && b.kind == binding.kind)
        {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    pub fn lookup(&self, control: Control, kind: EventKind) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| b.control == control && b.kind == kind)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn for_control(&self, control: Control) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.control == control)
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind(Binding::new(Control::Document, EventKind::Ready, Handler::Start));
        table.bind(Binding::new(Control::Accept, EventKind::Click, Handler::Accept));
        table.bind(Binding::new(
            Control::Evasive,
            EventKind::PointerEnter,
            Handler::Evade,
        ));
        // The same touch must not go on to activate the control
        table.bind(
            Binding::new(Control::Evasive, EventKind::TouchStart, Handler::Evade)
                .preventing_default(),
        );
        table.bind(Binding::new(Control::Evasive, EventKind::Click, Handler::Evade));
        table
    }
}
