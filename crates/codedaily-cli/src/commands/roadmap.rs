use clap::Subcommand;
use codedaily_core::machine::Action;
use codedaily_core::roadmap::WeekBlock;
use codedaily_core::session::RoadmapState;

use super::common;

#[derive(Subcommand)]
pub enum RoadmapAction {
    /// Generate a week-by-week learning plan
    Generate {
        /// Track: frontend, backend or dsa
        #[arg(long, default_value = "frontend")]
        track: String,
        /// Level: beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        level: String,
        /// Plan length in weeks (defaults to 8 when unparsable)
        #[arg(long)]
        weeks: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the last generated plan
    Show {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_plan(roadmap: &RoadmapState, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&roadmap.plan)?);
        return Ok(());
    }
    let track = roadmap.track.map(|t| t.label()).unwrap_or("Choose a track");
    let level = roadmap.level.map(|l| l.label()).unwrap_or("Select level");
    println!("{track} \u{b7} {level} \u{2014} {} week roadmap", roadmap.weeks);
    for WeekBlock { week, theme, bullets } in &roadmap.plan {
        println!("Week {week}: {theme}");
        for bullet in bullets {
            println!("  - {bullet}");
        }
    }
    Ok(())
}

pub fn run(action: RoadmapAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::load_app()?;

    match action {
        RoadmapAction::Generate {
            track,
            level,
            weeks,
            json,
        } => {
            app.dispatch(Action::GenerateRoadmap {
                track,
                level,
                weeks_raw: weeks,
            })?;
            print_plan(&app.session().roadmap, json)?;
            common::save_app(&app)?;
        }
        RoadmapAction::Show { json } => {
            if app.session().roadmap.plan.is_empty() {
                println!("No roadmap yet. Run `codedaily roadmap generate` first.");
            } else {
                print_plan(&app.session().roadmap, json)?;
            }
        }
    }
    Ok(())
}
