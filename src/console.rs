use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use crate::domain::commands::MapCommand;
use crate::domain::events::Event;
use crate::map::MapSurface;
use crate::roster::RosterRow;
use crate::ui::{ButtonState, FormUi};
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tracing::{info, instrument};

/// Line-oriented front end: parses commands from stdin and feeds the event
/// channel until EOF or `quit`.
#[instrument(skip_all)]
pub async fn run(tx: Sender<Event>) -> Result<(), io::Error> {
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match parse(line) {
            Ok(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

const HELP: &str = "\
Commands:
  click <lat> <lng>     place the pending marker
  drag <lat> <lng>      move the pending marker
  coords <lat>, <lng>   type a coordinate pair by hand
  country [name]        select a country (empty clears)
  state [name]          select a state
  city [name]           select a city
  save [name]           save the form as a new or edited location
  edit <id>             load a saved location into the form
  delete <id>           delete a saved location
  list                  reload the saved locations
  cancel                discard the current edit
  quit                  exit";

fn parse(line: &str) -> Result<Event, String> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "click" => Ok(Event::MapClicked(parse_coordinate(rest)?)),
        "drag" => Ok(Event::MarkerDragged(parse_coordinate(rest)?)),
        "coords" => Ok(Event::CoordinatesTyped(rest.to_string())),
        "country" => Ok(Event::CountrySelected(non_empty(rest))),
        "state" => Ok(Event::StateSelected(non_empty(rest))),
        "city" => Ok(Event::CitySelected(non_empty(rest))),
        "save" => Ok(Event::SaveRequested { name: non_empty(rest) }),
        "edit" => Ok(Event::EditRequested(parse_id(rest)?)),
        "delete" => Ok(Event::DeleteRequested(parse_id(rest)?)),
        "list" => Ok(Event::RosterReloadRequested),
        "cancel" => Ok(Event::CancelRequested),
        _ => Err(format!("Unknown command '{command}'\n{HELP}")),
    }
}

fn parse_coordinate(rest: &str) -> Result<Coordinate, String> {
    let mut parts = rest.split_whitespace();
    let (Some(latitude), Some(longitude), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Expected: <lat> <lng>".to_string());
    };

    let latitude = latitude.parse::<f64>().map_err(|_| format!("Not a number: '{latitude}'"))?;
    let longitude = longitude.parse::<f64>().map_err(|_| format!("Not a number: '{longitude}'"))?;

    Coordinate::new(latitude, longitude).map_err(|e| e.to_string())
}

fn parse_id(rest: &str) -> Result<u32, String> {
    rest.parse::<u32>().map_err(|_| format!("Not a location id: '{rest}'"))
}

fn non_empty(rest: &str) -> Option<String> {
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Map surface that narrates marker commands instead of drawing tiles.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

#[async_trait]
impl MapSurface for ConsoleSurface {
    async fn apply(&self, command: MapCommand) {
        match command {
            MapCommand::PlacePending(coordinate) => info!("🗺️ Pending marker at {}", coordinate.display_label()),
            MapCommand::ClearPending => info!("🗺️ Pending marker removed"),
            MapCommand::ReplaceMarkers(markers) => info!("🗺️ Showing {} saved marker(s)", markers.len()),
        }
    }
}

#[derive(Debug)]
pub struct ConsoleUi {
    assume_yes: bool,
}

impl ConsoleUi {
    pub fn new(config: &AppConfig) -> Self {
        ConsoleUi {
            assume_yes: config.console().assume_yes(),
        }
    }
}

#[async_trait]
impl FormUi for ConsoleUi {
    // The save command carries the name; there is no separate prompt to
    // fall back to on a plain terminal.
    async fn location_name(&self) -> Option<String> {
        println!("A name is required: save <name>");
        None
    }

    async fn alert(&self, message: &str) {
        println!("! {message}");
    }

    async fn confirm(&self, message: &str) -> bool {
        let answer = if self.assume_yes { "yes" } else { "no" };
        println!("{message} ({answer}, per console.assume_yes)");
        self.assume_yes
    }

    fn render_roster(&self, rows: &[RosterRow]) {
        if rows.is_empty() {
            println!("No saved locations");
            return;
        }

        println!("{:>4}  {:<24} {:<36} {}", "id", "name", "location", "coordinates");
        for row in rows {
            println!("{:>4}  {:<24} {:<36} {}", row.id, row.name, row.region, row.coordinates);
        }
    }

    fn set_buttons(&self, buttons: ButtonState) {
        let available = if buttons.update { "save (update), cancel" } else { "save (new)" };
        println!("Actions: {available}");
    }
}
