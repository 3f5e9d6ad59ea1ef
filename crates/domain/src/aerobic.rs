use std::{fmt, slice::Iter};

use chrono::Weekday;
use log::debug;

use crate::{DayWorkout, Property, WeeklySplit};

pub const POST_WORKOUT_MAX_MINUTES: u32 = 20;
pub const MAX_SESSIONS_PER_WEEK: u8 = 3;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AerobicMode {
    SeparateDays,
    PostWorkout,
    HybridAlternate,
    RunningOnly,
}

impl Property for AerobicMode {
    fn iter() -> Iter<'static, AerobicMode> {
        static MODES: [AerobicMode; 4] = [
            AerobicMode::SeparateDays,
            AerobicMode::PostWorkout,
            AerobicMode::HybridAlternate,
            AerobicMode::RunningOnly,
        ];
        MODES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            AerobicMode::SeparateDays => "Separate days",
            AerobicMode::PostWorkout => "Post workout",
            AerobicMode::HybridAlternate => "Hybrid alternate",
            AerobicMode::RunningOnly => "Running only",
        }
    }
}

impl AerobicMode {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "separate_days" | "separate" | "giorni_separati" => Some(AerobicMode::SeparateDays),
            "post_workout" | "after_workout" | "fine_allenamento" => Some(AerobicMode::PostWorkout),
            "hybrid_alternate" | "hybrid" | "alternate" | "alternato" => {
                Some(AerobicMode::HybridAlternate)
            }
            "running_only" | "running" | "solo_corsa" => Some(AerobicMode::RunningOnly),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Activity {
    BriskWalk,
    RunWalk,
    Run,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Activity::BriskWalk => "brisk walk",
                Activity::RunWalk => "run/walk intervals",
                Activity::Run => "continuous run",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AerobicSession {
    pub activity: Activity,
    pub minutes: u32,
    /// Run and walk minutes per interval, for interval sessions.
    pub intervals: Option<(u32, u32)>,
}

impl AerobicSession {
    const fn new(activity: Activity, minutes: u32) -> Self {
        Self {
            activity,
            minutes,
            intervals: None,
        }
    }

    const fn intervals(minutes: u32, run: u32, walk: u32) -> Self {
        Self {
            activity: Activity::RunWalk,
            minutes,
            intervals: Some((run, walk)),
        }
    }

    #[must_use]
    pub fn capped(self, max_minutes: u32) -> Self {
        Self {
            minutes: self.minutes.min(max_minutes),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AerobicPreference {
    pub mode: AerobicMode,
    pub sessions_per_week: u8,
}

/// Sessions of the built-in plan for a week, starting at week 1.
///
/// Weeks beyond the plan have no sessions.
#[must_use]
pub fn sessions(week: usize, sessions_per_week: u8) -> &'static [AerobicSession] {
    let count = usize::from(sessions_per_week.min(MAX_SESSIONS_PER_WEEK));
    match week.checked_sub(1).and_then(|i| PLAN.get(i)) {
        Some(sessions) => &sessions[..count],
        None => &[],
    }
}

/// Add the aerobic sessions of the week to a strength split.
#[must_use]
pub fn integrate(mut split: WeeklySplit, preference: &AerobicPreference) -> WeeklySplit {
    let sessions = sessions(split.index, preference.sessions_per_week);

    if sessions.is_empty() {
        debug!("no aerobic sessions in week {}", split.index);
        return split;
    }

    match preference.mode {
        AerobicMode::SeparateDays => {
            let free = free_weekdays(&split);
            place(&mut split, &free, sessions);
        }
        AerobicMode::PostWorkout => {
            for (day, session) in split.days.iter_mut().zip(sessions) {
                day.aerobic = Some(session.capped(POST_WORKOUT_MAX_MINUTES));
            }
        }
        AerobicMode::HybridAlternate => {
            let free = free_weekdays(&split);
            let mut preferred = split
                .days
                .iter()
                .map(|d| d.weekday.succ())
                .filter(|w| free.contains(w))
                .collect::<Vec<_>>();
            let rest = free
                .iter()
                .copied()
                .filter(|w| !preferred.contains(w))
                .collect::<Vec<_>>();
            preferred.extend(rest);
            place(&mut split, &preferred, sessions);
        }
        AerobicMode::RunningOnly => {
            let mut weekdays = split.days.iter().map(|d| d.weekday).collect::<Vec<_>>();
            weekdays.extend(free_weekdays(&split));
            split.days.clear();
            place(&mut split, &weekdays, sessions);
        }
    }

    split
}

fn free_weekdays(split: &WeeklySplit) -> Vec<Weekday> {
    WEEK.iter()
        .copied()
        .filter(|w| split.days.iter().all(|d| d.weekday != *w))
        .collect()
}

fn place(split: &mut WeeklySplit, weekdays: &[Weekday], sessions: &[AerobicSession]) {
    if sessions.len() > weekdays.len() {
        debug!(
            "dropping {} aerobic sessions without a free day",
            sessions.len() - weekdays.len()
        );
    }
    for (weekday, session) in weekdays.iter().zip(sessions) {
        split.days.push(DayWorkout::conditioning(*weekday, *session));
    }
    split.days.sort_by_key(|d| d.weekday.num_days_from_monday());
}

static PLAN: [[AerobicSession; 3]; 8] = [
    [
        AerobicSession::intervals(20, 1, 2),
        AerobicSession::new(Activity::BriskWalk, 25),
        AerobicSession::intervals(20, 1, 2),
    ],
    [
        AerobicSession::intervals(22, 2, 2),
        AerobicSession::new(Activity::BriskWalk, 30),
        AerobicSession::intervals(22, 2, 2),
    ],
    [
        AerobicSession::intervals(24, 3, 2),
        AerobicSession::new(Activity::BriskWalk, 30),
        AerobicSession::intervals(24, 3, 2),
    ],
    [
        AerobicSession::intervals(20, 2, 2),
        AerobicSession::new(Activity::BriskWalk, 25),
        AerobicSession::intervals(20, 2, 2),
    ],
    [
        AerobicSession::intervals(25, 5, 2),
        AerobicSession::new(Activity::BriskWalk, 35),
        AerobicSession::intervals(25, 5, 2),
    ],
    [
        AerobicSession::intervals(28, 8, 1),
        AerobicSession::new(Activity::Run, 15),
        AerobicSession::intervals(28, 8, 1),
    ],
    [
        AerobicSession::new(Activity::Run, 20),
        AerobicSession::intervals(30, 10, 1),
        AerobicSession::new(Activity::Run, 20),
    ],
    [
        AerobicSession::new(Activity::Run, 25),
        AerobicSession::intervals(30, 12, 1),
        AerobicSession::new(Activity::Run, 30),
    ],
];
