//! Character card rendering

use initrack_core::Character;

/// One card: id, name, initiative, HP, AC, and the link if any
pub fn render_card(character: &Character) -> String {
    let status = if character.dead { "  [DEAD]" } else { "" };
    let mut out = format!(
        "[{:>3}] {}{}  ({})\n      Initiative {:<4} HP: {}  AC: {}",
        character.id,
        character.name,
        status,
        character.color,
        character.initiative,
        hp_label(character),
        character.ac
    );
    if let Some(link) = &character.link {
        out.push_str("\n      ");
        out.push_str(link);
    }
    out
}

/// "current + temp / max", temp omitted when zero
pub fn hp_label(character: &Character) -> String {
    if character.temp_hp > 0 {
        format!(
            "{} + {} / {}",
            character.current_hp, character.temp_hp, character.max_hp
        )
    } else {
        format!("{} / {}", character.current_hp, character.max_hp)
    }
}

/// All cards in turn order
pub fn render_roster(characters: &[Character]) -> String {
    if characters.is_empty() {
        return "No characters yet. Add one with `initrack add --name <NAME> --max-hp <HP>`."
            .to_string();
    }

    characters
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
