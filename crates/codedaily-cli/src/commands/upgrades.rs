use codedaily_core::upgrades;

use super::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = common::load_app()?;
    let credits = app.session().credits;

    println!("Credits: {credits}");
    match upgrades::next_unlock(credits) {
        Some(next) => println!(
            "Next unlock: {} ({} more credits, {:.0}% there)",
            next.title,
            next.cost - credits,
            upgrades::progress_percent(credits)
        ),
        None => println!("All tools unlocked"),
    }

    println!();
    for feature in &upgrades::FEATURES {
        let status = if credits >= feature.cost {
            "unlocked".to_string()
        } else {
            format!("locked \u{b7} {}", feature.cost)
        };
        println!("{} {} [{status}]", feature.icon, feature.title);
        println!("    {}", feature.description);
    }

    println!();
    println!("Durations:");
    for opt in upgrades::duration_options(credits) {
        let lock = if opt.locked { " (locked)" } else { "" };
        println!("  {} = {}s{lock}", opt.label, opt.seconds);
    }
    Ok(())
}
