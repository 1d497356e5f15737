use super::{open_station, settle};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::capture::{CaptureProvider, FixedPosition, PhotoFile, collect_evidence};
use crate::core::summary::active_count;
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::ui::messages::{notice, success, warning, warnings};
use crate::utils::colors::colorize_event;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        kind,
        staff_id,
        photo,
        lat,
        lng,
    } = cmd
    {
        let mut station = open_station(cfg)?;

        // The station only offers active members.
        if let Some(member) = station.roster().get(staff_id)
            && !member.is_active()
        {
            return Err(AppError::Validation(format!(
                "{} is inactive and cannot clock in or out",
                member.name
            )));
        }

        let camera = photo.as_ref().map(PhotoFile::new);
        let position = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(FixedPosition::new(*lat, *lng)),
            _ => None,
        };

        let (evidence, capture_warnings) = collect_evidence(
            camera.as_ref().map(|c| c as &dyn CaptureProvider<Output = String>),
            position
                .as_ref()
                .map(|p| p as &dyn CaptureProvider<Output = GeoPoint>),
        );
        warnings(&capture_warnings);

        if let Some(member) = station.roster().get(staff_id)
            && member.presence == *kind
        {
            warning(format!(
                "{} is already {}; registering again.",
                member.name,
                kind.et_as_str().to_uppercase()
            ));
        }

        let entry = settle(station.clock_action(staff_id, *kind, evidence)?);

        success(format!(
            "{} registered for {} at {}",
            colorize_event(entry.kind),
            entry.staff_name,
            entry.get_date_time()
        ));

        let active = active_count(station.roster().list());
        if let Some(last) = station.last_event() {
            notice(format!(
                "{} {} · {} working now",
                last.staff_name,
                last.kind.et_as_str(),
                active
            ));
        }
    }

    Ok(())
}
