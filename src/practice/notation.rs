// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notation rendering.
//!
//! Renderers draw a practice exercise or a range preview into their own
//! output surface. [`TextRenderer`] writes a plain-text score.

use anyhow::{bail, Result};

use crate::catalog::Clef;
use crate::music::{Letter, SpelledPitch};

use super::{PracticeExercise, PracticeMode, PracticeNote};

/// Note drawn when a range key cannot be read
const FALLBACK_NOTE_KEY: &str = "c/4";

/// What to draw for a practice exercise
#[derive(Debug, Clone, Copy)]
pub struct PracticeRenderOptions<'a> {
    pub exercise: &'a PracticeExercise,
    pub mode: PracticeMode,
    pub width: u32,
    pub height: u32,
}

/// What to draw for a range preview: two half notes on one stave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRenderOptions {
    pub width: u32,
    pub height: u32,
    pub clef: Clef,
    /// Notation key of the low note, e.g. "g/3"
    pub left_note_key: String,
    /// Notation key of the high note, e.g. "e/5"
    pub right_note_key: String,
}

/// Draws notation into a renderer-owned surface
///
/// Each call replaces whatever the previous call drew.
pub trait NotationRenderer {
    /// Draw a practice exercise.
    ///
    /// # Returns
    /// * `Err` if the surface has no area
    fn render_practice(&mut self, options: &PracticeRenderOptions<'_>) -> Result<()>;

    /// Draw a range preview.
    ///
    /// Unreadable note keys are drawn as middle C rather than failing.
    fn render_range(&mut self, options: &RangeRenderOptions) -> Result<()>;
}

/// Renders scores as plain text, one stave per line
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last render
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn stave(&mut self, clef: Clef, time_signature: Option<&str>, notes: &[String]) {
        self.output.push_str(clef.notation_name());
        if let Some(time) = time_signature {
            self.output.push_str(&format!(" {}", time));
        }
        self.output.push_str(&format!(" | {}\n", notes.join(" ")));
    }
}

impl NotationRenderer for TextRenderer {
    fn render_practice(&mut self, options: &PracticeRenderOptions<'_>) -> Result<()> {
        check_area(options.width, options.height)?;
        self.output.clear();

        let exercise = options.exercise;
        self.output.push_str(&format!(
            "{} | {} | {}\n",
            exercise.title(),
            exercise.clef,
            exercise.tempo
        ));

        let time = options.mode.time_signature();
        match options.mode {
            PracticeMode::Full => {
                let up = note_tokens(&exercise.ascending_line(), &[]);
                let down = note_tokens(&exercise.descending_line(), &[]);
                self.stave(exercise.clef, Some(time), &up);
                self.stave(exercise.clef, None, &down);
            }
            PracticeMode::Rhythm => {
                let notes = note_tokens(&exercise.rhythm_line(), exercise.slur_spans());
                self.stave(exercise.clef, Some(time), &notes);
            }
        }

        Ok(())
    }

    fn render_range(&mut self, options: &RangeRenderOptions) -> Result<()> {
        check_area(options.width, options.height)?;
        self.output.clear();

        let notes: Vec<String> = [&options.left_note_key, &options.right_note_key]
            .iter()
            .map(|key| {
                let key = parse_note_key(key)
                    .map(|pitch| pitch.notation_key())
                    .unwrap_or_else(|| FALLBACK_NOTE_KEY.to_string());
                format!("{}:h", key)
            })
            .collect();
        self.stave(options.clef, Some("2/2"), &notes);

        Ok(())
    }
}

fn check_area(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("cannot render into a {}x{} area", width, height);
    }
    Ok(())
}

/// Format notes as `key:duration`, wrapping slurred spans in parentheses
fn note_tokens(notes: &[PracticeNote], slurs: &[[usize; 2]]) -> Vec<String> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let open = if slurs.iter().any(|[start, _]| *start == i) { "(" } else { "" };
            let close = if slurs.iter().any(|[_, end]| *end == i) { ")" } else { "" };
            format!("{}{}:{}{}", open, note.pitch.notation_key(), note.duration.code(), close)
        })
        .collect()
}

/// Parse a notation key like "f#/4" or "Bb/3"
pub fn parse_note_key(key: &str) -> Option<SpelledPitch> {
    let (name, octave) = key.trim().split_once('/')?;
    let mut chars = name.chars();
    let letter = Letter::from_char(chars.next()?.to_ascii_uppercase())?;
    let label = format!("{}{}{}", letter, chars.as_str(), octave);
    SpelledPitch::parse(&label).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KeySignature, ScaleMode, SlurPatternId};
    use crate::flow::TempoSetting;

    fn exercise(pattern: SlurPatternId) -> PracticeExercise {
        PracticeExercise::new(
            KeySignature::C,
            ScaleMode::Major,
            pattern,
            Clef::Treble,
            TempoSetting::Single { bpm: 96 },
            "C4",
        )
    }

    fn range(left: &str, right: &str) -> RangeRenderOptions {
        RangeRenderOptions {
            width: 320,
            height: 120,
            clef: Clef::Treble,
            left_note_key: left.to_string(),
            right_note_key: right.to_string(),
        }
    }

    #[test]
    fn test_parse_note_key() {
        assert_eq!(parse_note_key("f#/4").map(|p| p.label()), Some("F#4".to_string()));
        assert_eq!(parse_note_key("bb/3").map(|p| p.label()), Some("Bb3".to_string()));
        assert_eq!(parse_note_key("C/5").map(|p| p.label()), Some("C5".to_string()));
        assert_eq!(parse_note_key("h/4"), None);
        assert_eq!(parse_note_key("c4"), None);
        assert_eq!(parse_note_key(""), None);
    }

    #[test]
    fn test_render_full() {
        let ex = exercise(SlurPatternId::FullPhrase);
        let mut renderer = TextRenderer::new();
        renderer
            .render_practice(&PracticeRenderOptions {
                exercise: &ex,
                mode: PracticeMode::Full,
                width: 720,
                height: 214,
            })
            .unwrap();

        let lines: Vec<&str> = renderer.output().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "C Major (full-phrase) | Treble Clef | 96 bpm");
        assert!(lines[1].starts_with("treble 7/4 | c/4:16 d/4:16"));
        assert!(lines[1].ends_with("c/6:16"));
        assert!(lines[2].starts_with("treble | c/6:16 b/5:16"));
        assert!(lines[2].ends_with("d/4:16 c/4:q"));
    }

    #[test]
    fn test_render_rhythm_slurs() {
        let ex = exercise(SlurPatternId::EveryBeat);
        let mut renderer = TextRenderer::new();
        renderer
            .render_practice(&PracticeRenderOptions {
                exercise: &ex,
                mode: PracticeMode::Rhythm,
                width: 720,
                height: 214,
            })
            .unwrap();

        let stave = renderer.output().lines().nth(1).unwrap();
        assert_eq!(
            stave,
            "treble 4/4 | (c/4:8 d/4:16 e/4:16) (f/4:16 g/4:16 a/4:16 b/4:16) \
             (c/5:8 b/4:16 a/4:16) (g/4:16 f/4:16 e/4:16 d/4:16)"
        );
    }

    #[test]
    fn test_render_replaces_previous_output() {
        let ex = exercise(SlurPatternId::FullPhrase);
        let mut renderer = TextRenderer::new();
        let options = PracticeRenderOptions {
            exercise: &ex,
            mode: PracticeMode::Rhythm,
            width: 720,
            height: 214,
        };
        renderer.render_practice(&options).unwrap();
        renderer.render_practice(&options).unwrap();
        assert_eq!(renderer.output().lines().count(), 2);
    }

    #[test]
    fn test_render_range() {
        let mut renderer = TextRenderer::new();
        renderer.render_range(&range("g/3", "f#/5")).unwrap();
        assert_eq!(renderer.output(), "treble 2/2 | g/3:h f#/5:h\n");
    }

    #[test]
    fn test_render_range_falls_back_to_middle_c() {
        let mut renderer = TextRenderer::new();
        renderer.render_range(&range("???", "e/5")).unwrap();
        assert_eq!(renderer.into_output(), "treble 2/2 | c/4:h e/5:h\n");
    }

    #[test]
    fn test_zero_area_is_rejected() {
        let mut renderer = TextRenderer::new();
        let mut options = range("c/4", "c/5");
        options.width = 0;
        assert!(renderer.render_range(&options).is_err());
    }
}
