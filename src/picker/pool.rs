use serde::Serialize;
use std::cmp::Ordering;

use super::selection::PickSelection;
use crate::model::Golfer;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PoolEntry {
    pub golfer: Golfer,
    pub selected: bool,
    pub selectable: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PoolGroup {
    pub group: Option<u8>,
    pub golfers: Vec<PoolEntry>,
}

/// Pick pool laid out for the picker: groups in ascending order with the
/// ungrouped golfers last, best world rank first within each group.
#[must_use]
pub fn pool_view(pool: &[Golfer], selection: &PickSelection) -> Vec<PoolGroup> {
    let mut golfers: Vec<&Golfer> = pool.iter().collect();
    golfers.sort_by(|a, b| {
        last_if_none(a.group, b.group)
            .then_with(|| last_if_none(a.world_rank, b.world_rank))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut groups: Vec<PoolGroup> = Vec::new();
    for golfer in golfers {
        let selected = selection.contains(golfer.api_id);
        let entry = PoolEntry {
            golfer: golfer.clone(),
            selected,
            selectable: selected || selection.check_add(golfer).is_ok(),
        };
        match groups.last_mut() {
            Some(last) if last.group == golfer.group => last.golfers.push(entry),
            _ => groups.push(PoolGroup {
                group: golfer.group,
                golfers: vec![entry],
            }),
        }
    }
    groups
}

fn last_if_none<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
