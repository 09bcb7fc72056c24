#![allow(dead_code)]

use jersey_core::models::{JerseyInventory, JerseySize, Player, Submission};

pub fn submitter(id: &str, grade: u8, choices: [u32; 3], size: JerseySize) -> Player {
    Player::new(id, grade).with_submission(Submission::new(id, choices, size))
}

/// Numbers `1..=count`, sizes cycling through the size order.
pub fn cycling_inventory(count: u32) -> Vec<JerseyInventory> {
    (1..=count)
        .map(|n| {
            let a = JerseySize::ORDER[(n as usize) % JerseySize::ORDER.len()];
            let b = JerseySize::ORDER[(n as usize * 5 + 1) % JerseySize::ORDER.len()];
            JerseyInventory::new(n, [a, b])
        })
        .collect()
}

/// Mixed roster of returning and new players, deterministic from `count`.
pub fn mixed_roster(count: usize, max_number: u32) -> Vec<Player> {
    (0..count)
        .map(|i| {
            let n = i as u32;
            let choices = [
                n % max_number + 1,
                (n * 7 + 3) % max_number + 1,
                (n * 13 + 5) % max_number + 1,
            ];
            let size = JerseySize::ORDER[i % JerseySize::ORDER.len()];
            let mut player = submitter(&format!("p{i:03}"), 6 + (i % 3) as u8, choices, size)
                .with_fall_ball(i % 4 == 0);
            if i % 3 == 0 {
                player = player.returning(Some(choices[(i / 3) % 3]));
            } else if i % 5 == 0 {
                player = player.returning(Some(max_number + 10));
            }
            if i % 11 == 0 {
                player.submission = None;
            }
            player
        })
        .collect()
}
