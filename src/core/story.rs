/// Story synthesis — slot templates for quest titles, descriptions and stories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
}

/// Which narrative frame a theme's story uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StoryStyle {
    /// Quest chamber, game-show energy.
    Arcade,
    /// Kingdom under a curse.
    Saga,
    /// Terse mission briefing.
    #[default]
    Briefing,
}

/// A value a template can interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Prefix,
    Monster,
    Verb,
    Task,
}

/// Case transform applied to an interpolated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Case {
    AsIs,
    Lower,
    Upper,
    Title,
}

/// A segment of a parsed story template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorySegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// Slot interpolation: `{monster}`, `{prefix:upper}`, ...
    Slot { slot: Slot, case: Case },
}

/// The words drawn for one quest.
#[derive(Debug, Clone, Copy)]
pub struct StoryVars<'a> {
    pub prefix: &'a str,
    pub monster: &'a str,
    pub verb: &'a str,
    pub task: &'a str,
}

impl StoryVars<'_> {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Prefix => self.prefix,
            Slot::Monster => self.monster,
            Slot::Verb => self.verb,
            Slot::Task => self.task,
        }
    }
}

/// A parsed template — a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryTemplate {
    pub segments: Vec<StorySegment>,
}

impl StoryTemplate {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{slot}` or `{slot:case}` where slot is `prefix`, `monster`, `verb`
    ///   or `task` and case is `lower`, `upper` or `title`
    /// - `{{` / `}}` → literal brace
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<StoryTemplate, StoryError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                if !literal_buf.is_empty() {
                    segments.push(StorySegment::Literal(std::mem::take(&mut literal_buf)));
                }

                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(StoryError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    end += 1;
                }
                if end == len {
                    return Err(StoryError::TemplateParse("unclosed brace".to_string()));
                }

                let content: String = chars[start..end].iter().collect();
                segments.push(Self::parse_slot(&content)?);
                i = end + 1;
            } else if chars[i] == '}' {
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(StoryError::TemplateParse(
                    "unmatched closing brace".to_string(),
                ));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(StorySegment::Literal(literal_buf));
        }

        Ok(StoryTemplate { segments })
    }

    fn parse_slot(content: &str) -> Result<StorySegment, StoryError> {
        if content.is_empty() {
            return Err(StoryError::TemplateParse("empty braces".to_string()));
        }

        let (name, case) = match content.split_once(':') {
            Some((name, case)) => (name, case),
            None => (content, ""),
        };

        let slot = match name {
            "prefix" => Slot::Prefix,
            "monster" => Slot::Monster,
            "verb" => Slot::Verb,
            "task" => Slot::Task,
            other => {
                return Err(StoryError::TemplateParse(format!(
                    "unknown slot '{}'",
                    other
                )))
            }
        };

        let case = match case {
            "" => Case::AsIs,
            "lower" => Case::Lower,
            "upper" => Case::Upper,
            "title" => Case::Title,
            other => {
                return Err(StoryError::TemplateParse(format!(
                    "unknown case '{}' in '{}'",
                    other, content
                )))
            }
        };

        Ok(StorySegment::Slot { slot, case })
    }

    /// Render the template with the given words.
    pub fn render(&self, vars: &StoryVars<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                StorySegment::Literal(text) => out.push_str(text),
                StorySegment::Slot { slot, case } => {
                    let value = vars.get(*slot);
                    match case {
                        Case::AsIs => out.push_str(value),
                        Case::Lower => out.push_str(&value.to_lowercase()),
                        Case::Upper => out.push_str(&value.to_uppercase()),
                        Case::Title => out.push_str(&title_case(value)),
                    }
                }
            }
        }
        out
    }
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
///
/// Any non-letter starts a new word, so "don't stop" → "Don'T Stop".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

const TITLE: &str = "{prefix} Quest: {verb} the {monster} of {task:title}";

const DESCRIPTION: &str = "Transform the boring task {task} into an exciting adventure!";

const ARCADE: &str = "
🎮 QUEST STARTED 🎮

You stand at the entrance of the {prefix:lower} Quest Chamber.\x20
Before you lies the dreaded {monster}, guard of unfinished tasks.\x20
This beast feeds on procrastination and grows stronger with each passing moment.

🗺️ Your Mission: {verb} the {monster}
📋 Task at stake: {task}

The chamber echoes with ancient power. You feel the energy of countless adventurers who came before you.
Will you succeed where others have procrastinated?

🎯 GLORY AWAITS THE BRAVE!\x20
";

const SAGA: &str = "
🏰 FANTASY QUEST BEGINS 🏰

In the mystical realm of Productivity, the {prefix:lower} {monster} has awakened.\x20
This ancient evil spreads the curse of \"I will do it later\" throughout the land.

⚔️ Your Noble Quest: {verb} the {monster}
📜 Ancient Task: {task}

The wise wizards of Motivation Tower have chosen you for this quest.\x20
Armed with the Sword of Focus and Shield of Discipline, you venture forth.

✨ Will you break the curse and restore productivity to the kingdom?

🏆 LEGEND AND GLORY AWAIT!\x20
";

const BRIEFING: &str = "
🚀 MISSION BRIEFING 🚀

OPERATION: {prefix:upper} QUEST
TARGET: {monster}
OBJECTIVE: {verb}
PRIMARY TASK: {task}

The {monster} is causing system-wide productivity failure.\x20
Conventional methods have failed. Time for extraordinary measures.

🎯 EXECUTE WITH PRECISION
🎁 REWARD: Glory and Satisfaction

MISSION STATUS: ACTIVE
";

/// The parsed title, description and story templates.
#[derive(Debug, Clone)]
pub struct Narrator {
    title: StoryTemplate,
    description: StoryTemplate,
    arcade: StoryTemplate,
    saga: StoryTemplate,
    briefing: StoryTemplate,
}

impl Narrator {
    pub fn new() -> Result<Narrator, StoryError> {
        Ok(Narrator {
            title: StoryTemplate::parse(TITLE)?,
            description: StoryTemplate::parse(DESCRIPTION)?,
            arcade: StoryTemplate::parse(ARCADE)?,
            saga: StoryTemplate::parse(SAGA)?,
            briefing: StoryTemplate::parse(BRIEFING)?,
        })
    }

    pub fn title(&self, vars: &StoryVars<'_>) -> String {
        self.title.render(vars)
    }

    pub fn description(&self, vars: &StoryVars<'_>) -> String {
        self.description.render(vars)
    }

    pub fn story(&self, style: StoryStyle, vars: &StoryVars<'_>) -> String {
        let template = match style {
            StoryStyle::Arcade => &self.arcade,
            StoryStyle::Saga => &self.saga,
            StoryStyle::Briefing => &self.briefing,
        };
        template.render(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> StoryVars<'static> {
        StoryVars {
            prefix: "Epic",
            monster: "Boredom Beast",
            verb: "Defeat",
            task: "clean my room",
        }
    }

    #[test]
    fn parse_literal_only() {
        let t = StoryTemplate::parse("Hello, world.").unwrap();
        assert_eq!(
            t.segments,
            vec![StorySegment::Literal("Hello, world.".to_string())]
        );
    }

    #[test]
    fn parse_slots_with_case() {
        let t = StoryTemplate::parse("{prefix:upper} and {task}").unwrap();
        assert_eq!(t.segments.len(), 3);
        assert_eq!(
            t.segments[0],
            StorySegment::Slot {
                slot: Slot::Prefix,
                case: Case::Upper
            }
        );
        assert_eq!(
            t.segments[2],
            StorySegment::Slot {
                slot: Slot::Task,
                case: Case::AsIs
            }
        );
    }

    #[test]
    fn parse_escaped_braces() {
        let t = StoryTemplate::parse("Use {{braces}} here.").unwrap();
        assert_eq!(
            t.segments,
            vec![StorySegment::Literal("Use {braces} here.".to_string())]
        );
    }

    #[test]
    fn parse_errors() {
        assert!(StoryTemplate::parse("Bad {} here").is_err());
        assert!(StoryTemplate::parse("Bad {outer{inner}} here").is_err());
        assert!(StoryTemplate::parse("Bad {unclosed here").is_err());
        assert!(StoryTemplate::parse("Bad } here").is_err());
        assert!(StoryTemplate::parse("{dragon}").is_err());
        assert!(StoryTemplate::parse("{task:shout}").is_err());
    }

    #[test]
    fn render_case_transforms() {
        let t = StoryTemplate::parse("{prefix:lower}|{prefix:upper}|{task:title}").unwrap();
        assert_eq!(t.render(&vars()), "epic|EPIC|Clean My Room");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("clean my room"), "Clean My Room");
        assert_eq!(title_case("fIX the BUG"), "Fix The Bug");
        assert_eq!(title_case("don't stop"), "Don'T Stop");
        assert_eq!(title_case("3rd draft"), "3Rd Draft");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn narrator_title_and_description() {
        let narrator = Narrator::new().unwrap();
        assert_eq!(
            narrator.title(&vars()),
            "Epic Quest: Defeat the Boredom Beast of Clean My Room"
        );
        assert_eq!(
            narrator.description(&vars()),
            "Transform the boring task clean my room into an exciting adventure!"
        );
    }

    #[test]
    fn arcade_story() {
        let story = Narrator::new().unwrap().story(StoryStyle::Arcade, &vars());
        assert!(story.starts_with("\n🎮 QUEST STARTED 🎮\n"));
        assert!(story.contains("entrance of the epic Quest Chamber"));
        assert!(story.contains("🗺️ Your Mission: Defeat the Boredom Beast"));
        assert!(story.contains("📋 Task at stake: clean my room"));
        assert!(story.contains("epic Quest Chamber. \nBefore you"));
        assert!(story.ends_with("🎯 GLORY AWAITS THE BRAVE! \n"));
    }

    #[test]
    fn saga_story() {
        let story = Narrator::new().unwrap().story(StoryStyle::Saga, &vars());
        assert!(story.contains("the epic Boredom Beast has awakened"));
        assert!(story.contains("curse of \"I will do it later\""));
        assert!(story.contains("📜 Ancient Task: clean my room"));
        assert!(story.contains("has awakened. \nThis ancient evil"));
        assert!(story.ends_with("🏆 LEGEND AND GLORY AWAIT! \n"));
    }

    #[test]
    fn briefing_story() {
        let story = Narrator::new().unwrap().story(StoryStyle::Briefing, &vars());
        assert!(story.contains("OPERATION: EPIC QUEST"));
        assert!(story.contains("TARGET: Boredom Beast"));
        assert!(story.contains("OBJECTIVE: Defeat"));
        assert!(story.contains("productivity failure. \nConventional"));
        assert!(story.ends_with("MISSION STATUS: ACTIVE\n"));
    }

    #[test]
    fn story_style_default() {
        assert_eq!(StoryStyle::default(), StoryStyle::Briefing);
    }
}
