use crate::booking::{Mechanic, Roster};
use crate::cli::commands::MechanicsArgs;
use crate::errors::VelofixError;
use crate::repl::renderer;

pub async fn handle_mechanics(args: MechanicsArgs) -> Result<(), VelofixError> {
    let roster = filter_roster(Roster::reference(), args.available);

    if args.json {
        println!("{}", serde_json::to_string_pretty(roster.mechanics())?);
    } else {
        println!("{}", renderer::render_mechanics(&roster));
    }
    Ok(())
}

fn filter_roster(roster: Roster, available_only: bool) -> Roster {
    if !available_only {
        return roster;
    }
    let mechanics: Vec<Mechanic> = roster
        .mechanics()
        .iter()
        .filter(|m| m.is_available)
        .cloned()
        .collect();
    Roster::new(mechanics)
}
