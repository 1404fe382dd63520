//! Decoding of node action sets into short diagnostic mnemonics.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;

/// Action identifiers as exposed by the foreign UI.
///
/// The legacy identifiers double as bits in the bitmask encoding. Context
/// click arrived after that encoding was frozen; its identifier is
/// out-of-band and has no legacy bit.
pub mod action_ids {
    pub const FOCUS: u32 = 1 << 0;
    pub const CLEAR_FOCUS: u32 = 1 << 1;
    pub const SELECT: u32 = 1 << 2;
    pub const CLEAR_SELECTION: u32 = 1 << 3;
    pub const CLICK: u32 = 1 << 4;
    pub const LONG_CLICK: u32 = 1 << 5;
    pub const ACCESSIBILITY_FOCUS: u32 = 1 << 6;
    pub const CLEAR_ACCESSIBILITY_FOCUS: u32 = 1 << 7;
    pub const NEXT_AT_MOVEMENT_GRANULARITY: u32 = 1 << 8;
    pub const PREVIOUS_AT_MOVEMENT_GRANULARITY: u32 = 1 << 9;
    pub const NEXT_HTML_ELEMENT: u32 = 1 << 10;
    pub const PREVIOUS_HTML_ELEMENT: u32 = 1 << 11;
    pub const SCROLL_FORWARD: u32 = 1 << 12;
    pub const SCROLL_BACKWARD: u32 = 1 << 13;
    pub const COPY: u32 = 1 << 14;
    pub const PASTE: u32 = 1 << 15;
    pub const CUT: u32 = 1 << 16;
    pub const SET_SELECTION: u32 = 1 << 17;
    pub const EXPAND: u32 = 1 << 18;
    pub const COLLAPSE: u32 = 1 << 19;
    pub const DISMISS: u32 = 1 << 20;
    pub const SET_TEXT: u32 = 1 << 21;
    pub const CONTEXT_CLICK: u32 = 0x0102_003c;
}

/// One entry of the modern ordered action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionDescriptor {
    pub id: u32,
}

impl ActionDescriptor {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

/// The two mutually exclusive encodings under which a node exposes its
/// action set.
///
/// List mode resolves in the node's own descriptor order; bitmask mode
/// resolves in catalog declaration order. The two orderings differ for the
/// same semantic set, and that asymmetry is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeActions {
    List(Vec<ActionDescriptor>),
    Bitmask(u32),
}

impl Default for NodeActions {
    fn default() -> Self {
        NodeActions::Bitmask(0)
    }
}

// Declaration order is load-bearing: bitmask resolution emits in this order.
static ACTION_LABELS: &[(u32, &str)] = &[
    (action_ids::CLICK, "clk"),
    (action_ids::LONG_CLICK, "lck"),
    (action_ids::SCROLL_FORWARD, "scf"),
    (action_ids::SCROLL_BACKWARD, "scb"),
    (action_ids::NEXT_AT_MOVEMENT_GRANULARITY, "mvn"),
    (action_ids::PREVIOUS_AT_MOVEMENT_GRANULARITY, "mvp"),
    (action_ids::NEXT_HTML_ELEMENT, "mhn"),
    (action_ids::PREVIOUS_HTML_ELEMENT, "mhp"),
    (action_ids::SELECT, "sls"),
    (action_ids::CLEAR_SELECTION, "slc"),
    (action_ids::FOCUS, "ifs"),
    (action_ids::CLEAR_FOCUS, "ifc"),
    (action_ids::ACCESSIBILITY_FOCUS, "afs"),
    (action_ids::CLEAR_ACCESSIBILITY_FOCUS, "afc"),
    (action_ids::SET_SELECTION, "sel"),
    (action_ids::COPY, "cbc"),
    (action_ids::CUT, "cbx"),
    (action_ids::PASTE, "cbp"),
    (action_ids::DISMISS, "dsms"),
    (action_ids::COLLAPSE, "clps"),
    (action_ids::EXPAND, "xpnd"),
    (action_ids::SET_TEXT, "txs"),
];

// Appended to the catalog only when context click is available.
static CONTEXT_CLICK_LABEL: (u32, &str) = (action_ids::CONTEXT_CLICK, "cck");

static MNEMONIC_BY_ID: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    ACTION_LABELS
        .iter()
        .chain(std::iter::once(&CONTEXT_CLICK_LABEL))
        .map(|&(id, mnemonic)| (id, mnemonic))
        .collect()
});

/// Resolve an action set into mnemonic tokens.
///
/// Unknown identifiers are dropped silently. `cck` resolves only when the
/// `context_click` capability is set, and never in bitmask mode (the legacy
/// encoding has no bit assigned for it).
pub fn action_mnemonics(actions: &NodeActions, capabilities: &Capabilities) -> Vec<&'static str> {
    match actions {
        NodeActions::List(descriptors) => descriptors
            .iter()
            .filter(|descriptor| {
                descriptor.id != action_ids::CONTEXT_CLICK || capabilities.context_click
            })
            .filter_map(|descriptor| MNEMONIC_BY_ID.get(&descriptor.id).copied())
            .collect(),
        NodeActions::Bitmask(bits) => ACTION_LABELS
            .iter()
            .filter(|(id, _)| bits & id != 0)
            .map(|&(_, mnemonic)| mnemonic)
            .collect(),
    }
}
