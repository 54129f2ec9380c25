use crate::error::SuggestError;
use crate::model::SuggestedRecipe;

/// Labels the upstream prompt asks the model to emit. Field capture stops at
/// the next recognized label, so these double as terminators.
const NAME_LABEL: &str = "Recipe Name:";
const DIFFICULTY_LABEL: &str = "Difficulty Level:";
const TIME_LABEL: &str = "Estimated Cooking Time:";
const INGREDIENTS_LABEL: &str = "Primary Ingredients:";

const DEFAULT_DESCRIPTION: &str = "A delicious recipe tailored to your preferences.";
const DEFAULT_DIFFICULTY: &str = "Intermediate";
const DEFAULT_COOKING_TIME: &str = "30 minutes";

/// Instructions are never recovered from the text; every suggestion carries
/// the same placeholder steps.
const GENERIC_INSTRUCTIONS: [&str; 3] = [
    "Prepare all ingredients as listed.",
    "Follow cooking instructions for the recipe.",
    "Serve hot and enjoy your meal.",
];

/// Parse one block of provider free text into structured recipe suggestions.
///
/// The text is split into candidate blocks, each block is recovered
/// field-by-field on a best-effort basis, and malformed candidates are
/// dropped without aborting the rest. Output order follows input order and
/// no length cap is applied here.
///
/// # Errors
/// Returns [`SuggestError::NoRecipesFound`] when no candidate survives,
/// including for empty or whitespace-only input. Ugly-but-nonempty input
/// never errors; unrecovered fields fall back to defaults instead.
pub fn extract_recipes(text: &str) -> Result<Vec<SuggestedRecipe>, SuggestError> {
    let recipes: Vec<SuggestedRecipe> = split_blocks(text)
        .into_iter()
        .filter_map(parse_block)
        .collect();

    if recipes.is_empty() {
        return Err(SuggestError::NoRecipesFound);
    }
    Ok(recipes)
}

/// Split raw text into candidate blocks at `Recipe Name:` labels, leading
/// line ordinals (`1.`, `2.`, ...), and `Recipe N:` prefixes. The segment
/// before the first delimiter is kept as a candidate too; blocks that turn
/// out to be junk are discarded later by name recovery.
fn split_blocks(text: &str) -> Vec<&str> {
    let mut delimiters: Vec<(usize, usize)> = Vec::new();
    collect_label_delimiters(text, &mut delimiters);
    collect_numbered_recipe_delimiters(text, &mut delimiters);
    collect_ordinal_delimiters(text, &mut delimiters);
    delimiters.sort_unstable();

    let mut blocks = Vec::new();
    let mut cursor = 0;
    for (start, end) in delimiters {
        // A delimiter inside an already-consumed span (e.g. the ordinal in
        // "Recipe 1.") would split twice; a left-to-right scan takes the
        // earliest one and moves on.
        if start < cursor {
            continue;
        }
        push_candidate(&mut blocks, &text[cursor..start]);
        cursor = end;
    }
    push_candidate(&mut blocks, &text[cursor..]);
    blocks
}

fn push_candidate<'a>(blocks: &mut Vec<&'a str>, segment: &'a str) {
    if !segment.trim().is_empty() {
        blocks.push(segment);
    }
}

fn collect_label_delimiters(text: &str, out: &mut Vec<(usize, usize)>) {
    let mut from = 0;
    while let Some(pos) = text[from..].find(NAME_LABEL) {
        let start = from + pos;
        let end = start + NAME_LABEL.len();
        out.push((start, end));
        from = end;
    }
}

/// `Recipe N:` prefixes, anywhere in the text.
fn collect_numbered_recipe_delimiters(text: &str, out: &mut Vec<(usize, usize)>) {
    const PREFIX: &str = "Recipe ";
    let mut from = 0;
    while let Some(pos) = text[from..].find(PREFIX) {
        let start = from + pos;
        let after = &text[start + PREFIX.len()..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b':') {
            let end = start + PREFIX.len() + digits + 1;
            out.push((start, end));
            from = end;
        } else {
            from = start + PREFIX.len();
        }
    }
}

/// Ordinals only count at the start of a line, so `1.5 cups` inside a field
/// value does not split a block.
fn collect_ordinal_delimiters(text: &str, out: &mut Vec<(usize, usize)>) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && line.as_bytes().get(digits) == Some(&b'.') {
            out.push((offset, offset + digits + 1));
        }
        offset += line.len();
    }
}

/// Assemble one recipe from a candidate block. Field recovery is
/// independent: a missing field defaults, only a missing name drops the
/// whole block.
fn parse_block(block: &str) -> Option<SuggestedRecipe> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }

    let name = recover_name(block)?;
    if is_numbering_artifact(&name) {
        return None;
    }

    let description = extract_field(block, "Short Description", &["\n", DIFFICULTY_LABEL])
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let difficulty = extract_field(block, "Difficulty Level", &["\n", TIME_LABEL])
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());
    let cooking_time = extract_field(block, "Estimated Cooking Time", &["\n", INGREDIENTS_LABEL])
        .unwrap_or_else(|| DEFAULT_COOKING_TIME.to_string());
    let ingredients = extract_field(block, "Primary Ingredients", &["\n\n"])
        .map(|raw| split_ingredients(&raw))
        .unwrap_or_default();

    Some(SuggestedRecipe {
        name,
        description,
        difficulty,
        cooking_time,
        ingredients,
        instructions: GENERIC_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        image_url: None,
    })
}

/// Best-effort field recovery: locate `label` case-insensitively (with an
/// optional trailing colon) and capture up to the earliest of `terminators`
/// or the end of the block. The first label occurrence wins. Returns `None`
/// when the label is absent or the captured value is blank.
///
/// This narrow seam is the only place matching strategy lives; swapping the
/// scanner out does not touch record assembly in [`parse_block`].
fn extract_field(block: &str, label: &str, terminators: &[&str]) -> Option<String> {
    let label_start = find_ignore_ascii_case(block, label)?;
    let bytes = block.as_bytes();

    let mut value_start = label_start + label.len();
    if bytes.get(value_start) == Some(&b':') {
        value_start += 1;
    }
    while matches!(bytes.get(value_start), Some(b' ' | b'\t')) {
        value_start += 1;
    }

    let rest = &block[value_start..];
    let value_end = terminators
        .iter()
        .filter_map(|terminator| find_ignore_ascii_case(rest, terminator))
        .min()
        .unwrap_or(rest.len());

    let value = strip_emphasis(&rest[..value_end]);
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Case-insensitive substring search. Labels are ASCII, so a byte-window
/// comparison is enough and any match starts on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// The block's first line, emphasis-stripped, with any `Recipe N:` or `N.`
/// numbering prefix removed.
fn recover_name(block: &str) -> Option<String> {
    let first_line = block.lines().next()?;
    let cleaned = strip_emphasis(first_line);
    let cleaned = strip_ordinal_prefix(strip_numbered_recipe_prefix(cleaned.trim()));
    let name = cleaned.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn strip_numbered_recipe_prefix(name: &str) -> &str {
    const PREFIX: &str = "Recipe ";
    if let Some(after) = name.strip_prefix(PREFIX) {
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b':') {
            return after[digits + 1..].trim_start();
        }
    }
    name
}

fn strip_ordinal_prefix(name: &str) -> &str {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && name.as_bytes().get(digits) == Some(&b'.') {
        return name[digits + 1..].trim_start();
    }
    name
}

/// A bare `Recipe <number>` name means the splitter captured a numbering
/// artifact, not a real title.
fn is_numbering_artifact(name: &str) -> bool {
    name.strip_prefix("Recipe ")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Remove markup emphasis characters the generator sprinkles in despite
/// being told not to.
fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '\n')
        .map(strip_emphasis)
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
