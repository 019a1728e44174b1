//! The built-in 28-question bank.
//!
//! Every question of an axis is keyed the same way: `structure` and
//! `cognitive` items agree with a high score, `motivation` and `task` items
//! are reverse-keyed. All-minimum answers therefore land on
//! `{structure: 0, motivation: 100, cognitive: 0, task: 100}`.

use archetype_core::models::{Axis, Question};

pub(crate) fn questions() -> Vec<Question> {
    let mut questions = Vec::with_capacity(archetype_core::constants::DEFAULT_QUESTION_COUNT);

    questions.extend(
        [
            ("structure-01", "I plan my day before I start working.", 1.0),
            ("structure-02", "I keep a running to-do list and actually use it.", 1.0),
            ("structure-03", "I feel calmer when my workspace is organised.", 1.0),
            ("structure-04", "I prefer fixed routines over deciding as I go.", 1.5),
            ("structure-05", "I break big projects into scheduled steps.", 1.5),
            ("structure-06", "Unplanned interruptions throw off my whole day.", 1.0),
            ("structure-07", "I track deadlines in a calendar rather than in my head.", 1.0),
        ]
        .map(|(id, prompt, weight)| Question::likert(id, prompt, Axis::Structure).with_weight(weight)),
    );

    questions.extend(
        [
            ("motivation-01", "I need an external deadline before I can start.", 1.5),
            ("motivation-02", "Praise or recognition is what keeps me going.", 1.0),
            ("motivation-03", "I work best when someone is checking in on me.", 1.0),
            ("motivation-04", "I lose interest in tasks nobody else will see.", 1.0),
            ("motivation-05", "Consequences motivate me more than curiosity does.", 1.5),
            ("motivation-06", "I rarely start personal projects without a push.", 1.0),
            ("motivation-07", "Rewards I set for myself don't work unless others are involved.", 1.0),
        ]
        .map(|(id, prompt, weight)| {
            Question::likert(id, prompt, Axis::Motivation)
                .with_weight(weight)
                .inverted()
        }),
    );

    questions.extend(
        [
            ("cognitive-01", "I think about the big picture before the details.", 1.5),
            ("cognitive-02", "I often have several ideas competing for attention.", 1.0),
            ("cognitive-03", "I enjoy connecting ideas from unrelated fields.", 1.0),
            ("cognitive-04", "I get bored once a problem is mostly figured out.", 1.0),
            ("cognitive-05", "I'd rather brainstorm options than refine one.", 1.0),
            ("cognitive-06", "My attention follows whatever is most interesting.", 1.5),
            ("cognitive-07", "I skim instructions and figure things out as I go.", 1.0),
        ]
        .map(|(id, prompt, weight)| Question::likert(id, prompt, Axis::Cognitive).with_weight(weight)),
    );

    questions.extend(
        [
            ("task-01", "I put off tasks that feel boring even when they're easy.", 1.5),
            ("task-02", "Starting is the hardest part of any task for me.", 1.5),
            ("task-03", "I avoid tasks when I'm unsure how to do them perfectly.", 1.0),
            ("task-04", "I often switch tasks before finishing the current one.", 1.0),
            ("task-05", "Unfinished tasks pile up faster than I clear them.", 1.0),
            ("task-06", "I wait until I'm in the right mood to work.", 1.0),
            ("task-07", "Large tasks make me freeze rather than act.", 1.0),
        ]
        .map(|(id, prompt, weight)| {
            Question::likert(id, prompt, Axis::Task)
                .with_weight(weight)
                .inverted()
        }),
    );

    questions
}
