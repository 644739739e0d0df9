//! Parser for the backend's plain-text multiple-choice quiz format.
//!
//! The questions field of a `/api/tta/process` response is free text that
//! usually follows this shape:
//!
//! ```text
//! 1) What is sin(90)?
//! A) 0
//! B) 1
//! C) -1
//! D) 0.5
//! Answer: B
//! ```
//!
//! The backend's LLM drifts from the format often enough that parsing runs
//! in two passes: a strict block parse first, then a lenient line scan.
//! When both come up empty the raw text is kept so the UI can still show
//! it verbatim instead of dropping the questions.

/// One lettered choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqOption {
    pub letter: char,
    pub text: String,
}

/// One parsed question with its answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqQuestion {
    pub prompt: String,
    pub options: Vec<McqOption>,
    pub answer: char,
}

/// Result of parsing a questions blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuiz {
    /// At least one well-formed question was recovered.
    Questions(Vec<McqQuestion>),
    /// Nothing parseable; render the text as-is.
    Raw(String),
}

/// True for lines like `3) ...` that open a new question block.
fn is_question_start(line: &str) -> bool {
    let mut chars = line.chars();
    let mut saw_digit = false;
    for c in chars.by_ref() {
        if c.is_ascii_digit() {
            saw_digit = true;
        } else {
            return saw_digit && (c == ')' || c == '.');
        }
    }
    false
}

/// Strips the `N)` prefix from a question line.
fn question_prompt(line: &str) -> &str {
    match line.find(|c| c == ')' || c == '.') {
        Some(idx) => line[idx + 1..].trim(),
        None => line.trim(),
    }
}

/// Parses lines like `B) some text` into an option.
fn parse_option(line: &str) -> Option<McqOption> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next()?;
    if !('A'..='F').contains(&letter) {
        return None;
    }
    let sep = chars.next()?;
    if sep != ')' && sep != '.' && sep != ':' {
        return None;
    }
    let text = chars.as_str().trim();
    if text.is_empty() {
        return None;
    }
    Some(McqOption {
        letter,
        text: text.to_owned(),
    })
}

/// Parses `Answer: B` (with or without trailing option text).
fn parse_answer(line: &str) -> Option<char> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix("Answer:")
        .or_else(|| trimmed.strip_prefix("answer:"))
        .or_else(|| trimmed.strip_prefix("ANSWER:"))?;
    rest.trim()
        .chars()
        .next()
        .filter(|c| ('A'..='F').contains(c))
}

fn parse_block(lines: &[&str]) -> Option<McqQuestion> {
    let first = lines.first()?;
    if !is_question_start(first) {
        return None;
    }
    let prompt = question_prompt(first).to_owned();
    let mut options = Vec::new();
    let mut answer = None;
    for line in &lines[1..] {
        if let Some(opt) = parse_option(line) {
            options.push(opt);
        } else if let Some(a) = parse_answer(line) {
            answer = Some(a);
        }
    }
    let answer = answer?;
    if options.len() < 2 || !options.iter().any(|o| o.letter == answer) {
        return None;
    }
    Some(McqQuestion {
        prompt,
        options,
        answer,
    })
}

/// Strict pass: split on question-start lines, parse each block whole.
fn parse_strict(text: &str) -> Vec<McqQuestion> {
    let mut questions = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_question_start(line) && !block.is_empty() {
            if let Some(q) = parse_block(&block) {
                questions.push(q);
            }
            block.clear();
        }
        block.push(line);
    }
    if let Some(q) = parse_block(&block) {
        questions.push(q);
    }
    questions
}

/// Lenient pass: scan line by line, treating any non-option, non-answer
/// line as the start of a new prompt. Recovers quizzes where the LLM
/// dropped the question numbering.
fn parse_lenient(text: &str) -> Vec<McqQuestion> {
    let mut questions = Vec::new();
    let mut prompt: Option<String> = None;
    let mut options: Vec<McqOption> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(opt) = parse_option(line) {
            options.push(opt);
        } else if let Some(answer) = parse_answer(line) {
            if let Some(p) = prompt.take() {
                if options.len() >= 2 && options.iter().any(|o| o.letter == answer) {
                    questions.push(McqQuestion {
                        prompt: p,
                        options: std::mem::take(&mut options),
                        answer,
                    });
                }
            }
            options.clear();
        } else {
            prompt = Some(question_prompt(line).to_owned());
            options.clear();
        }
    }
    questions
}

/// Parse a questions blob, falling back to the raw text when no question
/// can be recovered.
pub fn parse_quiz(text: &str) -> ParsedQuiz {
    let strict = parse_strict(text);
    if !strict.is_empty() {
        return ParsedQuiz::Questions(strict);
    }
    let lenient = parse_lenient(text);
    if !lenient.is_empty() {
        return ParsedQuiz::Questions(lenient);
    }
    log::warn!("quiz text matched no known format, keeping raw");
    ParsedQuiz::Raw(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
1) What is sin(90)?
A) 0
B) 1
C) -1
D) 0.5
Answer: B

2) What is cos(0)?
A) 1
B) 0
C) -1
D) 2
Answer: A
";

    #[test]
    fn parses_well_formed_blocks() {
        let quiz = parse_quiz(WELL_FORMED);
        let questions = match quiz {
            ParsedQuiz::Questions(q) => q,
            ParsedQuiz::Raw(_) => panic!("expected parsed questions"),
        };
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "What is sin(90)?");
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].answer, 'B');
        assert_eq!(questions[1].answer, 'A');
    }

    #[test]
    fn lenient_pass_recovers_unnumbered_questions() {
        let text = "\
What is the unit circle radius?
A) 1
B) 2
Answer: A
";
        match parse_quiz(text) {
            ParsedQuiz::Questions(qs) => {
                assert_eq!(qs.len(), 1);
                assert_eq!(qs[0].prompt, "What is the unit circle radius?");
                assert_eq!(qs[0].answer, 'A');
            }
            ParsedQuiz::Raw(_) => panic!("lenient pass should have recovered this"),
        }
    }

    #[test]
    fn unparseable_text_is_kept_raw() {
        let text = "Here are some questions to think about while watching.";
        assert_eq!(parse_quiz(text), ParsedQuiz::Raw(text.to_owned()));
    }

    #[test]
    fn answer_outside_options_rejects_question() {
        let text = "\
1) Broken question
A) yes
B) no
Answer: F
";
        assert!(matches!(parse_quiz(text), ParsedQuiz::Raw(_)));
    }

    #[test]
    fn dot_separators_are_accepted() {
        let text = "\
1. Pick one
A. first
B. second
Answer: B
";
        match parse_quiz(text) {
            ParsedQuiz::Questions(qs) => assert_eq!(qs[0].answer, 'B'),
            ParsedQuiz::Raw(_) => panic!("dot-separated quiz should parse"),
        }
    }
}
