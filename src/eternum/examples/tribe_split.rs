use anyhow::Context;
use eternum::{compute_member_rewards, load_roster, shorten, RewardPolicy, RewardTotals};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: tribe_split <eternum-social-export.json>")?;

    let roster = load_roster(&path)?;
    let policy = RewardPolicy::default();

    for tribe in &roster.tribes {
        println!(
            "#{} {} ({} members, {:.0} LORDS / {:.0} STRK)",
            tribe.rank,
            tribe.name,
            tribe.member_count(),
            tribe.prize.lords,
            tribe.prize.strk
        );
        for record in compute_member_rewards(std::slice::from_ref(tribe), &policy) {
            println!(
                "\t{}\t{:.4}\t{:.2}\t{:.2}",
                shorten(&record.address),
                record.points_share,
                record.total_lords_reward,
                record.total_strk_reward
            );
        }
    }

    let totals = RewardTotals::from_tribes(&roster.tribes);
    println!("total\t{:.2}\t{:.2}", totals.total_lords, totals.total_strk);
    Ok(())
}
