//! Plain-text direct messages

use chrono::{NaiveDate, NaiveTime};
use roster_core::Game;

/// `Monday, January 2 at 3:04 PM`, falling back to the raw fields
fn when(game: &Game) -> String {
    match (
        NaiveDate::parse_from_str(&game.date, "%Y-%m-%d"),
        NaiveTime::parse_from_str(&game.time, "%H:%M"),
    ) {
        (Ok(date), Ok(time)) => date.and_time(time).format("%A, %B %-d at %-I:%M %p").to_string(),
        _ => format!("{} {}", game.date, game.time),
    }
}

/// Day-before reminder sent to every roster player
pub fn reminder_text(game: &Game) -> String {
    format!(
        "**Game Reminder!**\n\n\
         You're on the roster for tomorrow's game!\n\n\
         **Opponent:** {}\n\
         **When:** {} ET\n\n\
         Good luck out there!",
        game.opponent,
        when(game)
    )
}

/// Alert sent to managers when a roster player withdraws
pub fn withdrawal_text(game: &Game, player_name: &str) -> String {
    format!(
        "⚠️ **Sub Needed!**\n\n\
         **{player_name}** withdrew from the game vs **{}**.\n\
         **When:** {} ET\n\
         **Roster:** {}/{}",
        game.opponent,
        when(game),
        game.roster.len(),
        game.team_size
    )
}
