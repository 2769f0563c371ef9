use crate::models::MediaItem;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// Identifies one grid cell: the gallery render it belongs to and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub gallery: Uuid,
    pub index: usize,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.gallery.simple(), self.index)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid cell id '{0}'")]
pub struct InvalidCellId(String);

impl FromStr for CellId {
    type Err = InvalidCellId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCellId(s.to_string());
        let (gallery, index) = s.rsplit_once('-').ok_or_else(invalid)?;
        Ok(Self {
            gallery: Uuid::parse_str(gallery).map_err(|_| invalid())?,
            index: index.parse().map_err(|_| invalid())?,
        })
    }
}

struct Renders {
    order: VecDeque<Uuid>,
    items: HashMap<Uuid, Vec<MediaItem>>,
}

/// Items behind the rendered grids, looked up when a cell opens the detail modal.
/// Holds the most recent `capacity` renders; older ones are dropped first.
pub struct CellStore {
    renders: RwLock<Renders>,
    capacity: usize,
}

impl CellStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            renders: RwLock::new(Renders {
                order: VecDeque::new(),
                items: HashMap::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    pub fn register(&self, items: Vec<MediaItem>) -> Uuid {
        let gallery = Uuid::new_v4();
        let mut renders = self.renders.write().unwrap_or_else(|e| e.into_inner());

        while renders.order.len() >= self.capacity {
            if let Some(evicted) = renders.order.pop_front() {
                renders.items.remove(&evicted);
                tracing::debug!(gallery = %evicted, "Evicted gallery render");
            }
        }

        renders.order.push_back(gallery);
        renders.items.insert(gallery, items);
        gallery
    }

    pub fn get(&self, id: &CellId) -> Option<MediaItem> {
        let renders = self.renders.read().unwrap_or_else(|e| e.into_inner());
        renders
            .items
            .get(&id.gallery)
            .and_then(|items| items.get(id.index))
            .cloned()
    }

    pub fn retained(&self) -> usize {
        self.renders
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .order
            .len()
    }
}
