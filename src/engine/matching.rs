use rand::Rng;

use crate::models::Pair;
use crate::shuffle::shuffle;

/// Column of a matching entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Two columns of entries and the links drawn between them.
///
/// Left entries keep the pair order; right entries are shuffled once and
/// addressed by their display index. Links are one-to-one: each left entry
/// has at most one right partner and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingSurface {
    lefts: Vec<String>,
    rights: Vec<String>,
    links: Vec<Option<usize>>,
    pending: Option<usize>,
}

impl MatchingSurface {
    pub fn new<R: Rng + ?Sized>(pairs: &[Pair], rng: &mut R) -> Self {
        let mut rights: Vec<String> = pairs.iter().map(|pair| pair.right.clone()).collect();
        shuffle(&mut rights, rng);

        Self {
            lefts: pairs.iter().map(|pair| pair.left.clone()).collect(),
            rights,
            links: vec![None; pairs.len()],
            pending: None,
        }
    }

    pub fn lefts(&self) -> &[String] {
        &self.lefts
    }

    /// Right-column values in display order.
    pub fn rights(&self) -> &[String] {
        &self.rights
    }

    /// Left entry waiting for a right-hand click.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn partner_of_left(&self, left: usize) -> Option<usize> {
        self.links.get(left).copied().flatten()
    }

    pub fn partner_of_right(&self, right: usize) -> Option<usize> {
        self.links.iter().position(|link| *link == Some(right))
    }

    /// Current links as `(left, right)` display indices.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(left, link)| link.map(|right| (left, right)))
    }

    /// Click on a left entry: removes its link if it has one, otherwise
    /// makes it the pending entry.
    pub fn select_left(&mut self, left: usize) -> bool {
        if left >= self.lefts.len() {
            return false;
        }
        if self.links[left].take().is_some() {
            self.pending = None;
        } else {
            self.pending = Some(left);
        }
        true
    }

    /// Click on a right entry: removes its link if it has one, otherwise
    /// links it to the pending left entry. Without a pending entry nothing
    /// happens.
    pub fn select_right(&mut self, right: usize) -> bool {
        if right >= self.rights.len() {
            return false;
        }
        if let Some(left) = self.partner_of_right(right) {
            self.links[left] = None;
            return true;
        }
        match self.pending.take() {
            Some(left) => {
                self.links[left] = Some(right);
                true
            }
            None => false,
        }
    }

    /// Link two entries directly, dropping any link either of them had.
    pub fn connect(&mut self, left: usize, right: usize) -> bool {
        if left >= self.lefts.len() || right >= self.rights.len() {
            return false;
        }
        if let Some(previous) = self.partner_of_right(right) {
            self.links[previous] = None;
        }
        self.links[left] = Some(right);
        self.pending = None;
        true
    }

    pub fn disconnect(&mut self, side: Side, index: usize) -> bool {
        let left = match side {
            Side::Left => Some(index).filter(|left| self.partner_of_left(*left).is_some()),
            Side::Right => self.partner_of_right(index),
        };
        match left {
            Some(left) => {
                self.links[left] = None;
                true
            }
            None => false,
        }
    }

    /// Each left value paired with the value of its linked right entry.
    pub fn links_by_value(&self) -> Vec<(String, Option<String>)> {
        self.lefts
            .iter()
            .zip(&self.links)
            .map(|(left, link)| {
                let right = link.and_then(|right| self.rights.get(right)).cloned();
                (left.clone(), right)
            })
            .collect()
    }
}
