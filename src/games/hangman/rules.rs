use crate::models::gameword::letter_bit;

pub struct GuessContext {
    pub guessed: u32,
}

pub struct Rule {
    pub name: String,
    pub description: String,
    pub validate: fn(&str, &GuessContext) -> Result<(), String>,
}

pub fn get_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "not_empty".to_string(),
            description: "Guess must not be blank".to_string(),
            validate: |input, _ctx| {
                if input.trim().is_empty() {
                    Err("Please enter a letter!".to_string())
                } else {
                    Ok(())
                }
            },
        },
        Rule {
            name: "single_character".to_string(),
            description: "Guess must be exactly one character".to_string(),
            validate: |input, _ctx| {
                if input.trim().chars().count() != 1 {
                    Err("Guess must be a single letter!".to_string())
                } else {
                    Ok(())
                }
            },
        },
        Rule {
            name: "is_letter".to_string(),
            description: "Guess must be a letter from A to Z".to_string(),
            validate: |input, _ctx| match input.trim().chars().next() {
                Some(c) if c.is_ascii_alphabetic() => Ok(()),
                Some(c) => Err(format!("'{c}' is not a letter from A to Z!")),
                None => Err("Please enter a letter!".to_string()),
            },
        },
        Rule {
            name: "not_already_guessed".to_string(),
            description: "Guess must not repeat an earlier letter".to_string(),
            validate: |input, ctx| {
                let Some(c) = input.trim().chars().next() else {
                    return Ok(());
                };
                match letter_bit(c) {
                    Some(bit) if ctx.guessed & bit != 0 => Err(format!(
                        "You already guessed '{}'!",
                        c.to_ascii_uppercase()
                    )),
                    _ => Ok(()),
                }
            },
        },
    ]
}

pub fn find_rule_by_name<'a>(rules: &'a [Rule], name: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.name == name)
}

/// Runs every rule in order and returns the upper-cased letter, or the
/// first failing rule's message.
pub fn validate_guess(input: &str, ctx: &GuessContext) -> Result<char, String> {
    for rule in get_rules() {
        if let Err(msg) = (rule.validate)(input, ctx) {
            tracing::debug!("Guess {:?} rejected by rule {}", input, rule.name);
            return Err(msg);
        }
    }

    input
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| "Please enter a letter!".to_string())
}
