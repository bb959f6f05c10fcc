//! Static dependency graph between roster inputs and derived views.
//!
//! Each [`View`] lists the inputs and views it reads directly. The graph inverts those edges
//! so that a mutated [`Input`] can be mapped to every view that transitively depends on it.
//! Only those views are invalidated; everything else keeps its cached value.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::LazyLock,
};

/// A raw piece of roster state that mutations change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// Which signups exist (added or removed).
    Signups,
    /// The `seated` flag of existing signups.
    Seating,
    Roles,
    Groups,
    /// The raid's `hidden` and `finalized` flags.
    Status,
    /// The viewing account and its character roster.
    CurrentAccount,
}

/// A cached, derived view of the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    SignedUpCharacterIds,
    Seated,
    Unseated,
    WaitingList,
    WaitingListIds,
    WaitingListByAccount,
    SortedRoles,
    SeatedByRole,
    AccountSignups,
    AccountWaitingList,
    AccountSeated,
    TotalSlots,
    MoreThanOneGroup,
    HiddenAndNotFinalized,
    AvailableCharacters,
    CurrentAccountSeated,
    CurrentAccountSignedUp,
}

/// Either end of a dependency edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Input(Input),
    View(View),
}

impl View {
    /// Number of views, used to size per-view tables.
    pub const COUNT: usize = 17;

    pub const ALL: [View; View::COUNT] = [
        View::SignedUpCharacterIds,
        View::Seated,
        View::Unseated,
        View::WaitingList,
        View::WaitingListIds,
        View::WaitingListByAccount,
        View::SortedRoles,
        View::SeatedByRole,
        View::AccountSignups,
        View::AccountWaitingList,
        View::AccountSeated,
        View::TotalSlots,
        View::MoreThanOneGroup,
        View::HiddenAndNotFinalized,
        View::AvailableCharacters,
        View::CurrentAccountSeated,
        View::CurrentAccountSignedUp,
    ];

    /// Position of this view in [`View::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inputs and views this view reads directly.
    pub fn dependencies(self) -> &'static [Node] {
        use self::{Input as I, Node::Input as In, Node::View as Vw, View as V};

        match self {
            V::SignedUpCharacterIds => &[In(I::Signups)],
            V::Seated => &[In(I::Signups), In(I::Seating)],
            V::Unseated => &[In(I::Signups), In(I::Seating)],
            V::WaitingList => &[Vw(V::Seated), Vw(V::Unseated)],
            V::WaitingListIds => &[Vw(V::WaitingList)],
            V::WaitingListByAccount => &[Vw(V::WaitingList)],
            V::SortedRoles => &[In(I::Roles)],
            V::SeatedByRole => &[Vw(V::SortedRoles), Vw(V::Seated)],
            V::AccountSignups => &[In(I::Signups)],
            V::AccountWaitingList => &[Vw(V::WaitingList)],
            V::AccountSeated => &[Vw(V::Seated)],
            V::TotalSlots => &[In(I::Groups)],
            V::MoreThanOneGroup => &[In(I::Groups)],
            V::HiddenAndNotFinalized => &[In(I::Status)],
            V::AvailableCharacters => &[In(I::CurrentAccount), Vw(V::SignedUpCharacterIds)],
            V::CurrentAccountSeated => &[Vw(V::Seated), In(I::CurrentAccount)],
            V::CurrentAccountSignedUp => {
                &[In(I::Signups), In(I::Seating), In(I::CurrentAccount)]
            }
        }
    }
}

/// Reverse adjacency of the view dependencies.
#[derive(Debug)]
pub struct DependencyGraph {
    dependents: HashMap<Node, Vec<View>>,
}

/// Shared graph; the edges never change at runtime.
pub static GRAPH: LazyLock<DependencyGraph> = LazyLock::new(DependencyGraph::new);

impl DependencyGraph {
    /// Builds the graph from [`View::dependencies`].
    pub fn new() -> Self {
        let mut dependents: HashMap<Node, Vec<View>> = HashMap::new();
        for view in View::ALL {
            for dependency in view.dependencies() {
                dependents.entry(*dependency).or_default().push(view);
            }
        }
        Self { dependents }
    }

    /// Views reading `node` directly.
    pub fn direct_dependents(&self, node: Node) -> &[View] {
        self.dependents
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every view that transitively depends on `input`.
    ///
    /// # Returns
    /// - Views in breadth-first order from the input, each listed once
    pub fn affected_by(&self, input: Input) -> Vec<View> {
        let mut seen: HashSet<View> = HashSet::new();
        let mut affected = Vec::new();
        let mut queue: VecDeque<Node> = VecDeque::from([Node::Input(input)]);

        while let Some(node) = queue.pop_front() {
            for &view in self.direct_dependents(node) {
                if seen.insert(view) {
                    affected.push(view);
                    queue.push_back(Node::View(view));
                }
            }
        }

        affected
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
