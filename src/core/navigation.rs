use super::config::{NavigationConfig, UnlockPolicy};
use super::gallery::{piece_for_wall, ArtPiece, Wall};
use std::time::Duration;

/// Notification for the UI layer (info panel, nav dots, modal).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent<'c> {
    WallChanged {
        wall: Wall,
        piece: Option<&'c ArtPiece>,
    },
    PieceSelected(Option<&'c ArtPiece>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
    Close,
}

/// Key binding table. `Close` only applies while a piece is selected.
#[inline]
pub fn nav_action_for_key(key: &str) -> Option<NavAction> {
    match key {
        "ArrowRight" | "d" => Some(NavAction::Next),
        "ArrowLeft" | "a" => Some(NavAction::Prev),
        "Escape" => Some(NavAction::Close),
        _ => None,
    }
}

/// Which wall is current, whether a transition is still debouncing input,
/// and which piece (if any) is open in the detail view.
#[derive(Clone, Debug)]
pub struct GalleryNav<'c> {
    collection: &'c [ArtPiece],
    config: NavigationConfig,
    wall: Wall,
    lock_remaining: Option<Duration>,
    selected: Option<&'c ArtPiece>,
}

impl<'c> GalleryNav<'c> {
    pub fn new(collection: &'c [ArtPiece], config: NavigationConfig) -> Self {
        Self {
            collection,
            config,
            wall: Wall::North,
            lock_remaining: None,
            selected: None,
        }
    }

    /// Jump to wall `index` (taken modulo 4).
    ///
    /// Rejected while a previous transition is still locked; a rejected call
    /// does not extend the lock. Returns `None` when nothing changed.
    pub fn go_to_wall(&mut self, index: i64) -> Option<NavEvent<'c>> {
        if self.is_transitioning() {
            log::debug!("[nav] ignoring wall {} during transition", index);
            return None;
        }
        let wall = Wall::from_index(index);
        self.lock_remaining = Some(self.config.cooldown);
        if wall == self.wall {
            return None;
        }
        self.wall = wall;
        log::info!("[nav] wall -> {}", wall.name());
        Some(NavEvent::WallChanged {
            wall,
            piece: self.current_piece(),
        })
    }

    pub fn next_wall(&mut self) -> Option<NavEvent<'c>> {
        self.go_to_wall(self.wall.index() as i64 + 1)
    }

    pub fn prev_wall(&mut self) -> Option<NavEvent<'c>> {
        self.go_to_wall(self.wall.index() as i64 - 1)
    }

    /// Advance the debounce timer.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.lock_remaining {
            let left = remaining.saturating_sub(dt);
            self.lock_remaining = (!left.is_zero()).then_some(left);
        }
    }

    /// Camera reached the wall; releases the lock under [`UnlockPolicy::Arrival`].
    pub fn notify_arrived(&mut self) {
        if self.config.unlock == UnlockPolicy::Arrival {
            self.lock_remaining = None;
        }
    }

    pub fn select_piece(&mut self, piece: &'c ArtPiece) -> NavEvent<'c> {
        log::info!("[nav] selected {}", piece.id);
        self.selected = Some(piece);
        NavEvent::PieceSelected(Some(piece))
    }

    pub fn select_wall_piece(&mut self, wall: Wall) -> Option<NavEvent<'c>> {
        let piece = piece_for_wall(self.collection, wall)?;
        Some(self.select_piece(piece))
    }

    pub fn close_selection(&mut self) -> Option<NavEvent<'c>> {
        self.selected.take().map(|p| {
            log::info!("[nav] closed {}", p.id);
            NavEvent::PieceSelected(None)
        })
    }

    /// Keyboard entry point. While a piece is open only Escape is honored.
    pub fn handle_key(&mut self, key: &str) -> Option<NavEvent<'c>> {
        let action = nav_action_for_key(key)?;
        if self.selected.is_some() {
            return match action {
                NavAction::Close => self.close_selection(),
                _ => None,
            };
        }
        match action {
            NavAction::Next => self.next_wall(),
            NavAction::Prev => self.prev_wall(),
            NavAction::Close => None,
        }
    }

    pub fn current_wall(&self) -> Wall {
        self.wall
    }

    pub fn wall_index(&self) -> usize {
        self.wall.index()
    }

    pub fn current_piece(&self) -> Option<&'c ArtPiece> {
        piece_for_wall(self.collection, self.wall)
    }

    pub fn selected(&self) -> Option<&'c ArtPiece> {
        self.selected
    }

    pub fn is_transitioning(&self) -> bool {
        self.lock_remaining.is_some()
    }

    pub fn collection(&self) -> &'c [ArtPiece] {
        self.collection
    }
}
