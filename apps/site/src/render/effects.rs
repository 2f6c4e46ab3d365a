#![allow(dead_code)]

//! Hand-off to the visual-effect collaborators.
//!
//! Reveal-on-scroll and tilt-on-hover are attached imperatively, so every
//! full-fragment replacement must register the new nodes again.

use std::collections::BTreeSet;

use serde::Serialize;

/// Position of a rendered node: the `index`-th element carrying `class`
/// inside `container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeRef {
    pub container: &'static str,
    pub class: &'static str,
    pub index: usize,
}

pub trait Effects {
    /// The container's previous nodes were discarded.
    fn clear(&mut self, container: &str);

    /// Makes the node eligible for the scroll-reveal `visible` transition.
    fn reveal(&mut self, node: &NodeRef);

    /// Attaches pointer-driven hover tilt to the node.
    fn tilt(&mut self, node: &NodeRef);
}

/// Records registrations; stands in for the browser-side observers.
#[derive(Debug, Default, Serialize)]
pub struct EffectRegistry {
    reveal: BTreeSet<NodeRef>,
    tilt: BTreeSet<NodeRef>,
    registrations: usize,
}

impl EffectRegistry {
    pub fn revealed(&self) -> impl Iterator<Item = &NodeRef> {
        self.reveal.iter()
    }

    pub fn tilted(&self) -> impl Iterator<Item = &NodeRef> {
        self.tilt.iter()
    }

    pub fn is_revealed(&self, node: &NodeRef) -> bool {
        self.reveal.contains(node)
    }

    pub fn is_tilted(&self, node: &NodeRef) -> bool {
        self.tilt.contains(node)
    }

    /// Total register calls since creation, including repeats.
    pub fn registrations(&self) -> usize {
        self.registrations
    }
}

impl Effects for EffectRegistry {
    fn clear(&mut self, container: &str) {
        self.reveal.retain(|n| n.container != container);
        self.tilt.retain(|n| n.container != container);
    }

    fn reveal(&mut self, node: &NodeRef) {
        self.reveal.insert(*node);
        self.registrations += 1;
    }

    fn tilt(&mut self, node: &NodeRef) {
        self.tilt.insert(*node);
        self.registrations += 1;
    }
}
