use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use reelnight_core::{
    schedule_and_sync, suggest_slots, unschedule, AgeCategory, CalendarStore, Movie,
    RecurrencePattern, WatchIntent,
};

mod calendar;
mod state;

#[derive(Parser, Debug)]
#[command(name = "reelnight", version, about = "Family movie-night planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a movie to the catalog
    Add {
        /// Movie title
        title: String,

        /// Age band the movie is aimed at
        #[arg(long, value_enum)]
        age: AgeArg,

        /// Catalog id (defaults to a slug of the title)
        #[arg(long)]
        id: Option<String>,
    },

    /// List the catalog, including scheduled dates
    List,

    /// Suggest viewing windows for a movie
    Suggest {
        /// Catalog id of the movie
        movie: String,

        /// Household age bands, comma-separated (e.g. preschoolers,tweens)
        #[arg(long, value_enum, value_delimiter = ',', required = true)]
        ages: Vec<AgeArg>,

        /// Which day to plan for
        #[arg(long, value_enum, default_value = "tonight")]
        when: WhenArg,

        /// Explicit date (YYYY-MM-DD), overrides --when
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Confirm a schedule and record a calendar event
    Schedule {
        /// Catalog id of the movie
        movie: String,

        /// Start time, local wall clock: "YYYY-MM-DD HH:MM"
        #[arg(long)]
        at: String,

        /// Make it a standing movie night
        #[arg(long, value_enum)]
        repeat: Option<RepeatArg>,

        /// Also push the event to Google Calendar via gcalcli
        #[arg(long)]
        push: bool,
    },

    /// Clear a movie's scheduled date
    Unschedule {
        /// Catalog id of the movie
        movie: String,
    },

    /// List upcoming recorded movie nights
    Upcoming {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the recorded events as an ICS calendar
    ExportIcs,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AgeArg {
    Preschoolers,
    LittleKids,
    BigKids,
    Tweens,
}

impl From<AgeArg> for AgeCategory {
    fn from(a: AgeArg) -> Self {
        match a {
            AgeArg::Preschoolers => AgeCategory::Preschoolers,
            AgeArg::LittleKids => AgeCategory::LittleKids,
            AgeArg::BigKids => AgeCategory::BigKids,
            AgeArg::Tweens => AgeCategory::Tweens,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WhenArg {
    Tonight,
    Tomorrow,
    Weekend,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RepeatArg {
    Weekly,
    Biweekly,
    Monthly,
}

impl From<RepeatArg> for RecurrencePattern {
    fn from(r: RepeatArg) -> Self {
        match r {
            RepeatArg::Weekly => RecurrencePattern::Weekly,
            RepeatArg::Biweekly => RecurrencePattern::Biweekly,
            RepeatArg::Monthly => RecurrencePattern::Monthly,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Add { title, age, id } => {
            let mut movies = state::read_catalog()?;
            let id = id.unwrap_or_else(|| state::slug_id(&title));
            if state::find_movie(&movies, &id).is_some() {
                bail!("catalog already has id '{}'", id);
            }
            movies.push(Movie::new(id.clone(), title, age.into()));
            state::write_catalog(&movies)?;
            println!("Added '{}'", id);
        }

        Command::List => {
            let movies = state::read_catalog()?;
            if movies.is_empty() {
                println!("Catalog is empty. Add one: reelnight add \"Title\" --age tweens");
                return Ok(());
            }
            for m in &movies {
                match m.scheduled_date {
                    Some(at) => println!(
                        "{} | {} | {} | scheduled {}",
                        m.id,
                        m.title,
                        m.age_category.label(),
                        at.format("%Y-%m-%d %H:%M")
                    ),
                    None => println!("{} | {} | {}", m.id, m.title, m.age_category.label()),
                }
            }
        }

        Command::Suggest { movie, ages, when, date } => {
            let movies = state::read_catalog()?;
            let idx = state::find_movie(&movies, &movie)
                .with_context(|| format!("no movie '{}' in catalog", movie))?;

            let intent = match (date, when) {
                (Some(d), _) => WatchIntent::Custom(d),
                (None, WhenArg::Tonight) => WatchIntent::Tonight,
                (None, WhenArg::Tomorrow) => WatchIntent::Tomorrow,
                (None, WhenArg::Weekend) => WatchIntent::ThisWeekend,
            };
            let target = intent.resolve(local_today()?);

            let household: Vec<AgeCategory> = ages.into_iter().map(Into::into).collect();
            let suggestions = suggest_slots(&movies[idx], target, &household)?;

            if suggestions.is_empty() {
                println!(
                    "No slot fits {} on {}. Try another day.",
                    movies[idx].title,
                    target.format("%A %Y-%m-%d")
                );
                return Ok(());
            }

            println!("Suggestions for {} on {}:\n", movies[idx].title, target.format("%A %Y-%m-%d"));
            for (i, s) in suggestions.iter().enumerate() {
                println!("{}. [{:>5.1}] {}", i + 1, s.score, s.rationale);
            }
        }

        Command::Schedule { movie, at, repeat, push } => {
            let mut movies = state::read_catalog()?;
            let idx = state::find_movie(&movies, &movie)
                .with_context(|| format!("no movie '{}' in catalog", movie))?;

            let at = NaiveDateTime::parse_from_str(&at, "%Y-%m-%d %H:%M")
                .with_context(|| format!("invalid start time '{}' (want YYYY-MM-DD HH:MM)", at))?;

            let mut store = calendar::IcsCalendarStore::load()?;
            let outcome =
                schedule_and_sync(&mut movies[idx], at, repeat.map(Into::into), &mut store);
            state::write_catalog(&movies)?;

            println!(
                "Scheduled '{}' for {}",
                movies[idx].title,
                outcome.scheduled_at.format("%A %Y-%m-%d %H:%M")
            );
            match &outcome.calendar {
                reelnight_core::CalendarSync::Synced(id) => {
                    println!("Recorded calendar event {}", id.0);
                }
                reelnight_core::CalendarSync::Failed(reason) => {
                    // Partial success: the local schedule stands.
                    println!("Warning: calendar event not recorded ({reason}).");
                    println!("The local schedule is saved; re-run export-ics or push later.");
                }
            }

            if push {
                let tz = local_tz()?;
                match calendar::events_to_ics(store.events(), tz)
                    .and_then(|ics| calendar::push_ics_via_gcalcli(&ics, None))
                {
                    Ok(()) => println!("Pushed to Google Calendar."),
                    Err(e) => println!("Warning: push failed ({e}). Local schedule is saved."),
                }
            }
        }

        Command::Unschedule { movie } => {
            let mut movies = state::read_catalog()?;
            let idx = state::find_movie(&movies, &movie)
                .with_context(|| format!("no movie '{}' in catalog", movie))?;
            unschedule(&mut movies[idx]);
            state::write_catalog(&movies)?;
            println!("Unscheduled '{}'", movies[idx].title);
        }

        Command::Upcoming { limit } => {
            let store = calendar::IcsCalendarStore::load()?;
            let events = store.upcoming(limit)?;
            if events.is_empty() {
                println!("No movie nights recorded.");
                return Ok(());
            }
            for e in events {
                println!("{} | {} | {}", e.id.0, e.start.format("%a %Y-%m-%d %H:%M"), e.title);
            }
        }

        Command::ExportIcs => {
            let store = calendar::IcsCalendarStore::load()?;
            let ics = calendar::events_to_ics(store.events(), local_tz()?)?;
            print!("{}", ics);
        }
    }

    Ok(())
}

fn local_tz() -> Result<Tz> {
    let profile = state::read_profile()?;
    profile
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone in profile: {}", profile.timezone))
}

fn local_today() -> Result<NaiveDate> {
    Ok(Utc::now().with_timezone(&local_tz()?).date_naive())
}
