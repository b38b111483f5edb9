//! Trail safety quiz.

use serde::Serialize;

/// Labels shown next to the four options.
pub const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable identifier.
    pub id: &'static str,
    /// The question text.
    pub prompt: &'static str,
    /// Exactly four options.
    pub options: [&'static str; 4],
    /// Index of the right option.
    pub correct: usize,
    /// Why the right option is right.
    pub why: &'static str,
}

/// Index of an option letter (`a`..`d`, case-insensitive).
#[must_use]
pub fn option_index(letter: char) -> Option<usize> {
    LETTERS
        .iter()
        .position(|l| *l == letter.to_ascii_uppercase())
}

/// Where a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Not started.
    Intro,
    /// Answering questions.
    InProgress,
    /// Every question answered.
    Finished,
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// The option that was picked.
    pub picked: usize,
    /// The right option.
    pub correct: usize,
    /// Explanation for the right option.
    pub why: &'static str,
}

impl Answer {
    /// Whether the pick was right.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.picked == self.correct
    }
}

/// One run through the questions.
///
/// Each question accepts a single answer; further picks are ignored until
/// [`advance`](Self::advance) moves on.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Question],
    phase: QuizPhase,
    index: usize,
    score: usize,
    picked: Option<usize>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::with_questions(QUESTIONS)
    }
}

impl QuizSession {
    /// A session over the built-in questions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over a custom question set.
    #[must_use]
    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            phase: QuizPhase::Intro,
            index: 0,
            score: 0,
            picked: None,
        }
    }

    /// Reset progress and begin at the first question.
    pub fn start(&mut self) {
        self.index = 0;
        self.score = 0;
        self.picked = None;
        self.phase = if self.questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        };
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// The question being asked, while in progress.
    #[must_use]
    pub fn current(&self) -> Option<&'static Question> {
        match self.phase {
            QuizPhase::InProgress => self.questions.get(self.index),
            _ => None,
        }
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Answer the current question.
    ///
    /// Returns `None` when no question is open, the question was already
    /// answered, or `option` is out of range.
    pub fn answer(&mut self, option: usize) -> Option<Answer> {
        if self.picked.is_some() {
            return None;
        }
        let question = self.current()?;
        if option >= question.options.len() {
            return None;
        }

        self.picked = Some(option);
        if option == question.correct {
            self.score += 1;
        }
        Some(Answer {
            picked: option,
            correct: question.correct,
            why: question.why,
        })
    }

    /// Move past an answered question. Unanswered questions stay put.
    pub fn advance(&mut self) -> QuizPhase {
        if self.phase == QuizPhase::InProgress && self.picked.is_some() {
            self.picked = None;
            if self.index + 1 >= self.questions.len() {
                self.phase = QuizPhase::Finished;
            } else {
                self.index += 1;
            }
        }
        self.phase
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in the session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// End-of-quiz summary.
    #[must_use]
    pub fn report(&self) -> String {
        format!("You scored {}/{}", self.score, self.total())
    }
}

/// The built-in questions.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: "tent-spot",
        prompt: "You're choosing a tent spot in the Rockies. What’s best?",
        options: [
            "Valley bottom near a stream",
            "Flat, well-drained ground away from dead branches",
            "Right under a big fir tree",
            "On a ridge for the breeze",
        ],
        correct: 1,
        why: "Drainage + widowmaker safety > views/breeze.",
    },
    Question {
        id: "fire-ban",
        prompt: "During a fire ban, which is generally allowed?",
        options: [
            "Wood campfire in a fire ring",
            "Candle lantern",
            "Gas stove with a shutoff valve",
            "Charcoal grill",
        ],
        correct: 2,
        why: "Pressurized gas stoves with shutoff are often permitted; always check local rules.",
    },
    Question {
        id: "bear-food",
        prompt: "Best practice for food in backcountry bear country?",
        options: [
            "Inside tent",
            "In backpack under vestibule",
            "Proper bear hang 60–70 m from camp",
            "Bear canister/locker",
        ],
        correct: 3,
        why: "Hard-sided canister/locker beats hangs (trees aren't always suitable).",
    },
    Question {
        id: "protozoa",
        prompt: "Water treatment that removes protozoa (e.g., Giardia)?",
        options: [
            "Boiling 1 minute",
            "Activated carbon only",
            "UV on cloudy water",
            "Let it settle",
        ],
        correct: 0,
        why: "Boiling is reliable; filters (≤0.2–0.3 μm) also work, but carbon/settling/UV on turbid water do not.",
    },
    Question {
        id: "trip-safety",
        prompt: "Before a trip, the smartest safety move is:",
        options: [
            "Pack extra snacks",
            "Tell a friend your route & return time",
            "Bring two knives",
            "Wear new boots to break them in",
        ],
        correct: 1,
        why: "A check-in plan is a proven lifesaver if things go wrong.",
    },
    Question {
        id: "black-bear",
        prompt: "A black bear notices you at ~30 m. Best move?",
        options: [
            "Run downhill",
            "Make yourself look bigger, speak firmly, back away slowly",
            "Throw food to distract it",
            "Climb a tree",
        ],
        correct: 1,
        why: "Calm, controlled retreat + presence; never run or feed.",
    },
    Question {
        id: "grizzly-charge",
        prompt: "With cubs nearby, a grizzly false-charges. Your response?",
        options: [
            "Sprint to the trees",
            "Stand ground, deploy bear spray within range",
            "Play dead immediately at 50 m",
            "Turn your back and walk fast",
        ],
        correct: 1,
        why: "Stand ground; spray at ~8–10 m for defensive charges.",
    },
    Question {
        id: "moose-ears",
        prompt: "A moose pins its ears and steps toward you. Do:",
        options: [
            "Wave trekking poles and approach",
            "Run to the open meadow",
            "Put solid cover (trees/vehicle) between you and moose",
            "Throw your pack at it",
        ],
        correct: 2,
        why: "Use obstacles; moose can sprint and trample.",
    },
    Question {
        id: "cougar-shadow",
        prompt: "A cougar shadows your group on a forest trail. Best action?",
        options: [
            "Maintain eye contact, get big, shout/throw, don’t run",
            "Crouch to look smaller",
            "Turn off headlamps to avoid provoking it",
            "Scatter and hide",
        ],
        correct: 0,
        why: "Intimidate; never crouch/run; stay together.",
    },
    Question {
        id: "wolves",
        prompt: "Wolves approach curiously to within ~20 m. You should:",
        options: [
            "Stand your ground, shout, throw, back away facing them",
            "Offer food so they leave",
            "Turn and jog away",
            "Lie down and stay still",
        ],
        correct: 0,
        why: "Haze confidently; do not flee or feed.",
    },
    Question {
        id: "greywater",
        prompt: "Dishwater disposal in backcountry?",
        options: [
            "Dump in stream",
            "Scatter strained greywater 60–70 m from water",
            "Pour at the tent door",
            "Bury in fire pit",
        ],
        correct: 1,
        why: "Strain food bits; broadcast away from water/camp.",
    },
    Question {
        id: "camp-distance",
        prompt: "How far from lakes/streams should you camp (where required)?",
        options: [
            "10 m",
            "30 m",
            "60–70 m (≈200 ft)",
            "Right on the shore",
        ],
        correct: 2,
        why: "Protects riparian areas and wildlife movement.",
    },
    Question {
        id: "cathole",
        prompt: "Human waste: ideal cathole?",
        options: [
            "5 cm deep, by the trail",
            "15–20 cm deep, 60–70 m from water/trail/camp",
            "In shallow moss",
            "Directly in water to “wash away”",
        ],
        correct: 1,
        why: "Depth + distance support decomposition and hygiene.",
    },
    Question {
        id: "right-of-way",
        prompt: "Trail courtesy on a steep singletrack?",
        options: [
            "Uphill hiker has right of way",
            "Downhill hiker does",
            "Largest group does",
            "Whoever is more tired",
        ],
        correct: 0,
        why: "Uphill momentum is harder to restart.",
    },
    Question {
        id: "firewood",
        prompt: "Firewood practice in managed campgrounds?",
        options: [
            "Break dead branches off trees",
            "Cut live limbs low",
            "Buy/bring local, dry firewood",
            "Burn driftwood from protected beaches",
        ],
        correct: 2,
        why: "Local dry wood reduces pest spread; never cut or strip trees.",
    },
    Question {
        id: "hypothermia",
        prompt: "Early hypothermia signs in a camper?",
        options: [
            "Fumbling, mumbling, stumbling",
            "Nosebleed, hiccups",
            "Rash and itching",
            "Ear pain only",
        ],
        correct: 0,
        why: "The “umbles” signal cooling + impaired function.",
    },
    Question {
        id: "heat-exhaustion",
        prompt: "Best first step for heat exhaustion?",
        options: [
            "Tighten clothing",
            "Move to shade, cool with water, sip fluids",
            "Run to create breeze",
            "Drink alcohol for “vasodilation”",
        ],
        correct: 1,
        why: "Active cooling + hydration.",
    },
    Question {
        id: "lightning",
        prompt: "Lightning nearby (flash–bang <30s). You should:",
        options: [
            "Shelter under tallest lone tree",
            "Spread out, avoid ridges/isolated trees, crouch if caught",
            "Lie flat in open field",
            "Keep fishing with graphite rod",
        ],
        correct: 1,
        why: "Minimize strike risk; avoid conductors and prominences.",
    },
    Question {
        id: "bleeding",
        prompt: "Severe bleeding on the trail. First priority?",
        options: [
            "Find a twig for a tourniquet",
            "Direct, firm pressure on the wound",
            "Elevate only",
            "Give caffeine",
        ],
        correct: 1,
        why: "Direct pressure is the fastest lifesaver; tourniquet if trained and needed.",
    },
    Question {
        id: "tick",
        prompt: "Removing an attached tick?",
        options: [
            "Burn with a match",
            "Twist with fingers",
            "Pull steadily with fine-tipped tweezers close to skin",
            "Smother with oil",
        ],
        correct: 2,
        why: "Clean, steady traction reduces retained mouthparts; clean site after.",
    },
    Question {
        id: "contours",
        prompt: "Contour lines packed tightly on your map mean:",
        options: [
            "Flat ground",
            "Cliffs/very steep terrain",
            "Wetlands",
            "Private land",
        ],
        correct: 1,
        why: "Close lines = rapid elevation change.",
    },
    Question {
        id: "orient-map",
        prompt: "Best basic way to orient a paper map?",
        options: [
            "Point north arrow at your car",
            "Align map’s north with compass north",
            "Hold it however is comfy",
            "Fold until only your trail shows",
        ],
        correct: 1,
        why: "Orientation makes terrain features match reality.",
    },
    Question {
        id: "river-crossing",
        prompt: "Safest river crossing choice?",
        options: [
            "Narrow, roaring chute",
            "Widest, shallow braided section",
            "Waterfall lip",
            "Log above rapids",
        ],
        correct: 1,
        why: "Wide + shallow reduces force; unbuckle hip belt before crossing.",
    },
    Question {
        id: "tstorms",
        prompt: "You expect afternoon thunderstorms. Smart itinerary tweak?",
        options: [
            "Plan ridgeline travel at 3–5 PM",
            "Do high, exposed sections early",
            "Pack less water to go faster",
            "Ignore clouds if forecast was “sunny”",
        ],
        correct: 1,
        why: "Beat convective storms by starting high travel early.",
    },
    Question {
        id: "whiteout",
        prompt: "Whiteout on a lake in canoe country. Best nav tactic?",
        options: [
            "Paddle toward where you “feel” shore is",
            "Take a compass bearing and handrail along shoreline",
            "Wait in middle for wind to push you",
            "Follow another group without asking",
        ],
        correct: 1,
        why: "Bearing + handrail (known edge) is reliable; don’t guess.",
    },];
