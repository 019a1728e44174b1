//! Static archetype reference content served to the results page.

use serde::Serialize;

use super::ArchetypeId;

/// Descriptive profile for one archetype. Reference data, never user data.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub blockers: &'static [&'static str],
    pub quick_wins: &'static [&'static str],
    pub recommended_tools: &'static [&'static str],
}

pub(crate) fn profile_for(id: ArchetypeId) -> &'static ArchetypeProfile {
    match id {
        ArchetypeId::AdaptiveGeneralist => &ADAPTIVE_GENERALIST,
        ArchetypeId::CarefulPerfectionist => &CAREFUL_PERFECTIONIST,
        ArchetypeId::CreativeExplorer => &CREATIVE_EXPLORER,
        ArchetypeId::DeadlineSprinter => &DEADLINE_SPRINTER,
        ArchetypeId::ScatteredStarter => &SCATTERED_STARTER,
        ArchetypeId::StrategicVisionary => &STRATEGIC_VISIONARY,
        ArchetypeId::StructuredAchiever => &STRUCTURED_ACHIEVER,
    }
}

static ADAPTIVE_GENERALIST: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::AdaptiveGeneralist,
    name: "The Adaptive Generalist",
    tagline: "Flexible by default, steady under change.",
    description: "No single working style dominates. You switch between planning and improvising, \
                  solo focus and collaboration, depending on what the week demands.",
    strengths: &[
        "Adjusts quickly when priorities shift",
        "Comfortable with both detail work and big-picture thinking",
        "Rarely stuck in one rigid routine",
    ],
    blockers: &[
        "Can drift without a clear default system",
        "Spreads energy across too many modes at once",
    ],
    quick_wins: &[
        "Pick one weekly review slot and protect it",
        "Label each task as plan-mode or flow-mode before starting",
    ],
    recommended_tools: &["Weekly review template", "Simple kanban board"],
};

static CAREFUL_PERFECTIONIST: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::CarefulPerfectionist,
    name: "The Careful Perfectionist",
    tagline: "High standards, slow starts.",
    description: "You value order and precision, and you hold your work to a high bar. \
                  The same standards can make starting or finishing feel risky.",
    strengths: &[
        "Thorough and accurate",
        "Builds reliable systems",
        "Notices details others miss",
    ],
    blockers: &[
        "Delays starting until conditions feel right",
        "Over-polishes work that is already good enough",
    ],
    quick_wins: &[
        "Set a 'good enough' definition before each task",
        "Timebox revisions to a fixed number of passes",
    ],
    recommended_tools: &["Checklists", "Pomodoro timer", "Draft-first writing template"],
};

static CREATIVE_EXPLORER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::CreativeExplorer,
    name: "The Creative Explorer",
    tagline: "Curiosity is your engine.",
    description: "You are driven from within and think in possibilities. \
                  Rigid schedules feel confining; novelty keeps you engaged.",
    strengths: &[
        "Generates original ideas",
        "Self-motivated on interesting problems",
        "Connects ideas across domains",
    ],
    blockers: &[
        "Loses interest once the novel part is done",
        "Resists routines that would carry projects to completion",
    ],
    quick_wins: &[
        "Capture ideas in one inbox instead of starting each one",
        "Pair every new project with a defined finish line",
    ],
    recommended_tools: &["Idea inbox", "Mind-mapping app", "Project finish-line card"],
};

static DEADLINE_SPRINTER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::DeadlineSprinter,
    name: "The Deadline Sprinter",
    tagline: "Pressure turns you on.",
    description: "External stakes and deadlines bring out your best work. \
                  Without them, tasks wait until urgency arrives.",
    strengths: &[
        "Delivers fast under pressure",
        "Decisive when time is short",
        "Executes once engaged",
    ],
    blockers: &[
        "Needs urgency to start",
        "Recurring last-minute crunches drain energy",
    ],
    quick_wins: &[
        "Create artificial checkpoints with an accountability partner",
        "Split large deadlines into dated mini-deadlines",
    ],
    recommended_tools: &["Accountability partner", "Countdown timer", "Milestone calendar"],
};

static SCATTERED_STARTER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::ScatteredStarter,
    name: "The Scattered Starter",
    tagline: "Many sparks, few fires.",
    description: "Your mind jumps between ideas and structure does not come naturally. \
                  Starting is easy; sustaining is the challenge.",
    strengths: &[
        "Quick to see new possibilities",
        "Energetic at the start of projects",
        "Comfortable with ambiguity",
    ],
    blockers: &[
        "Frequent context switching",
        "Tasks stall once they become routine",
        "External motivation fades quickly",
    ],
    quick_wins: &[
        "Limit work in progress to three items",
        "Use body doubling for routine tasks",
    ],
    recommended_tools: &["Body-doubling sessions", "Three-item daily list", "Visual timer"],
};

static STRATEGIC_VISIONARY: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::StrategicVisionary,
    name: "The Strategic Visionary",
    tagline: "Sees the whole board.",
    description: "You combine big-picture thinking with a taste for structure. \
                  Plans come easily; day-to-day execution can lag behind them.",
    strengths: &[
        "Long-range planning",
        "Designs systems and roadmaps",
        "Self-directed",
    ],
    blockers: &[
        "Over-plans relative to doing",
        "Finds routine execution tedious",
    ],
    quick_wins: &[
        "Attach one concrete next action to every plan",
        "Review the plan weekly against what actually shipped",
    ],
    recommended_tools: &["Roadmap board", "Next-action list", "Weekly review template"],
};

static STRUCTURED_ACHIEVER: ArchetypeProfile = ArchetypeProfile {
    id: ArchetypeId::StructuredAchiever,
    name: "The Structured Achiever",
    tagline: "Systems in, results out.",
    description: "Routines, plans, and intrinsic drive make you consistently productive. \
                  The risk is rigidity when circumstances change.",
    strengths: &[
        "Consistent follow-through",
        "Strong routines",
        "Engages tasks without procrastinating",
    ],
    blockers: &[
        "Struggles when plans are disrupted",
        "Can overcommit because execution feels easy",
    ],
    quick_wins: &[
        "Schedule buffer blocks for unplanned work",
        "Review commitments before accepting new ones",
    ],
    recommended_tools: &["Time blocking calendar", "Habit tracker", "Capacity planner"],
};
