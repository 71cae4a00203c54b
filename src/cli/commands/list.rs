use crate::cli::commands::parse_charge_type;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::parse_range;
use crate::store;
use crate::ui::messages::info;
use crate::utils::format::{format_amount, pad_left, pad_right, short_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        charge_type,
    } = cmd
    {
        let type_filter = parse_charge_type(charge_type.as_deref())?;
        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let mut store = store::open(cfg)?;
        let profile = store.load_profile()?;
        let sessions = store.list_sessions()?;

        let mut shown = 0usize;
        println!(
            "{}  {}  {}  {}  {}  {}",
            pad_right("ID", 8),
            pad_right("DATE", 10),
            pad_left("CHARGE", 9),
            pad_left("KWH", 6),
            pad_right("TYPE", 8),
            pad_left("COST", 10),
        );

        for s in &sessions {
            if let Some(t) = type_filter {
                if s.charge_type != Some(t) {
                    continue;
                }
            }
            if let Some((start, end)) = bounds {
                let date = s.date()?;
                if date < start || date > end {
                    continue;
                }
            }

            let charge = match s.end_percent {
                Some(end) => format!("{}→{}%", s.start_percent, end),
                None if s.is_active() => format!("{}%→…", s.start_percent),
                None => format!("{}%→?", s.start_percent),
            };
            let kwh = s.kwh.map(|k| format!("{:.1}", k)).unwrap_or_default();
            let ctype = s.charge_type.map(|t| t.label()).unwrap_or("-");
            let cost = match s.cost {
                Some(c) => format_amount(
                    c,
                    s.currency.as_deref().unwrap_or(profile.currency.as_str()),
                ),
                None => "-".to_string(),
            };

            println!(
                "{}  {}  {}  {}  {}  {}",
                pad_right(short_id(&s.id), 8),
                pad_right(&s.date()?.to_string(), 10),
                pad_left(&charge, 9),
                pad_left(&kwh, 6),
                pad_right(ctype, 8),
                pad_left(&cost, 10),
            );
            shown += 1;
        }

        if shown == 0 {
            info("No sessions found.");
        }
    }

    Ok(())
}
