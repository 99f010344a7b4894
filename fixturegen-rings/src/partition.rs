//! Splitting a roster into blocks
//!
//! Level 3 - Steps

use crate::blocks::block_sizes;

/// Block size multiple that keeps every round full.
///
/// With an even ring count half the rings is enough, since every player
/// plays six times.
pub fn nice_multiple(rings: usize) -> usize {
    if rings % 2 == 0 {
        rings / 2
    } else {
        rings
    }
}

/// Choose block sizes for `team_count` players, largest first.
///
/// Uses as many blocks as the smallest design allows. The first attempt
/// keeps every block but one a multiple of [`nice_multiple`]; if that
/// produces a size with no design, the players are split evenly instead.
/// Returns `None` when neither split uses only available designs.
pub fn partition_block_sizes(team_count: usize, rings: usize) -> Option<Vec<usize>> {
    let available = block_sizes(rings);
    let min = *available.first()?;

    let fits = |sizes: &[usize]| sizes.iter().all(|s| available.contains(s));

    let mut sizes = nice_partition(team_count, min, nice_multiple(rings))
        .filter(|sizes| fits(sizes))
        .or_else(|| even_partition(team_count, min).filter(|sizes| fits(sizes)))?;

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Some(sizes)
}

/// All remainder in the first block, the rest multiples of `nice`
fn nice_partition(team_count: usize, min: usize, nice: usize) -> Option<Vec<usize>> {
    let mut blocks = team_count / min;
    if blocks == 0 || nice == 0 {
        return None;
    }

    let first = (team_count / blocks / nice) * nice + team_count % nice;
    let mut remaining = team_count.checked_sub(first)?;
    let mut sizes = vec![first];
    blocks -= 1;

    while remaining > 0 {
        if blocks == 0 {
            return None;
        }
        let next = (remaining / blocks / nice) * nice;
        if next == 0 {
            return None;
        }
        sizes.push(next);
        remaining -= next;
        blocks -= 1;
    }

    Some(sizes)
}

fn even_partition(team_count: usize, min: usize) -> Option<Vec<usize>> {
    let mut blocks = team_count / min;
    if blocks == 0 {
        return None;
    }

    let mut remaining = team_count;
    let mut sizes = Vec::with_capacity(blocks);
    while remaining > 0 {
        if blocks == 0 {
            return None;
        }
        let next = remaining / blocks;
        if next == 0 {
            return None;
        }
        sizes.push(next);
        remaining -= next;
        blocks -= 1;
    }

    Some(sizes)
}
