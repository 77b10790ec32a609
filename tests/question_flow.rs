use helpkit::question::{InputSource, Notifier, ScriptedInput};
use helpkit::{Answer, AnswerType, ErrorCode, Question, QuestionConfig};

/// Answers from a fixed list; `None` entries cancel the prompt.
struct Recorder {
    script: Vec<Option<&'static str>>,
    asked: usize,
}

impl InputSource for Recorder {
    fn read(&mut self, _prompt: &str) -> helpkit::Result<Option<String>> {
        let next = self.script.get(self.asked).copied().flatten().map(String::from);
        self.asked += 1;
        Ok(next)
    }
}

#[derive(Default)]
struct CountingNotifier {
    count: usize,
}

impl Notifier for CountingNotifier {
    fn notify(&mut self, _message: &str) {
        self.count += 1;
    }
}

#[test]
fn number_question_rejects_then_accepts() {
    let question = Question::new("Pick a number")
        .answer_type(AnswerType::Number)
        .range(1, 10);
    let mut input = ScriptedInput::new(["0", "11", "abc", "5"]);
    let mut notes: Vec<String> = Vec::new();

    assert_eq!(question.ask(&mut input, &mut notes).unwrap(), Answer::Number(5));
    assert_eq!(
        notes,
        vec![
            "Needs to be more than 0",
            "Needs to be less than 11",
            "Need to enter a number.",
        ]
    );
}

#[test]
fn cancellations_do_not_notify() {
    let question = Question::new("Name?");
    let mut input = Recorder {
        script: vec![None, None, Some("ada")],
        asked: 0,
    };
    let mut notifier = CountingNotifier::default();

    let answer = question.ask(&mut input, &mut notifier).unwrap();

    assert_eq!(answer, Answer::Text("ada".to_string()));
    assert_eq!(input.asked, 3);
    assert_eq!(notifier.count, 0);
}

#[test]
fn cancellations_count_toward_max_attempts() {
    let question = Question::new("Name?").with_max_attempts(2);
    let mut input = Recorder {
        script: vec![None, None, Some("ada")],
        asked: 0,
    };
    let mut notifier = CountingNotifier::default();

    let err = question.ask(&mut input, &mut notifier).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationAttemptsExhausted);
    assert!(err.details.get("lastRejection").is_none());
}

#[test]
fn question_from_json_config() {
    let config: QuestionConfig = serde_json::from_str(
        r#"{"prompt":"Username?","pattern":"^[a-z]+$","min":3,"max":8}"#,
    )
    .unwrap();
    let question = Question::from_config(&config).unwrap();
    let mut input = ScriptedInput::new(["ab", "has space", "toolongname", "Alice"]);
    let mut notifier = CountingNotifier::default();

    let answer = question.ask(&mut input, &mut notifier).unwrap();
    assert_eq!(answer, Answer::Text("alice".to_string()));
    assert_eq!(notifier.count, 3);
}

#[test]
fn validation_is_reusable_across_calls() {
    let question = Question::new("Ok?").answer_type(AnswerType::Boolean);
    assert!(question.validate("sure").is_err());
    assert_eq!(question.validate("no").unwrap(), Answer::Bool(false));
    assert!(question.validate("sure").is_err());
}
