//! The ritual state machine.
//!
//! Walks a session through selection, `max_bits` yes/no questions, and the
//! reveal. Question `i` shows every item whose identifier has bit `i` set; a
//! "yes" sets bit `i` of the answer bitmask. Once all questions are answered
//! the bitmask *is* the chosen item's identifier, so resolution is a single
//! map lookup.

use std::collections::HashMap;

use tracing::{debug, info, trace, warn};

use crate::config::RitualConfig;
use crate::error::{RitualError, RitualResult};
use crate::item::{Item, ItemIdentifier};
use crate::phase::{Answer, SessionPhase};

/// Outcome of resolving a completed session.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a, P> {
    /// The answers spell the identifier of this item.
    Found(&'a Item<P>),
    /// No item in the pool carries the spelled identifier.
    NotFound {
        /// The accumulated answer bitmask.
        bitmask: u32,
    },
}

impl<P> Resolution<'_, P> {
    /// The resolved item, if any.
    pub fn item(&self) -> Option<&Item<P>> {
        match self {
            Self::Found(item) => Some(item),
            Self::NotFound { .. } => None,
        }
    }
}

/// A card-fortune ritual over a pool of items with payload `P`.
#[derive(Debug, Clone)]
pub struct RitualEngine<P> {
    config: RitualConfig,
    items: Vec<Item<P>>,
    by_identifier: HashMap<ItemIdentifier, usize>,
    phase: SessionPhase,
    current_question: u32,
    answer_bitmask: u32,
    answers: Vec<Answer>,
}

impl<P> Default for RitualEngine<P> {
    fn default() -> Self {
        Self::new(RitualConfig::default())
    }
}

impl<P> RitualEngine<P> {
    /// Create an engine with an empty pool, in the selection phase.
    pub fn new(config: RitualConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            by_identifier: HashMap::new(),
            phase: SessionPhase::Selecting,
            current_question: 0,
            answer_bitmask: 0,
            answers: Vec::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RitualConfig {
        &self.config
    }

    /// Number of questions per session.
    pub fn max_bits(&self) -> u32 {
        self.config.max_bits()
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Acquired items in pool order.
    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    /// Look up an item by identifier.
    pub fn item(&self, identifier: ItemIdentifier) -> Option<&Item<P>> {
        self.by_identifier
            .get(&identifier)
            .map(|&index| &self.items[index])
    }

    /// 0-based index of the question being asked (equals `max_bits` once revealing).
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    /// Bits set by "yes" answers so far.
    pub fn answer_bitmask(&self) -> u32 {
        self.answer_bitmask
    }

    /// Answers given this session, in order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Questions still to be answered.
    pub fn questions_remaining(&self) -> u32 {
        self.max_bits().saturating_sub(self.current_question)
    }

    /// Replace the pool with `pool`, assigning identifiers 1, 2, 3, ... in order.
    ///
    /// Only the first `effective_pool_size` entries are kept. A shorter pool is
    /// accepted as-is; answer sequences that spell a missing identifier then
    /// resolve to [`Resolution::NotFound`]. Counters and answers are cleared
    /// and the session returns to [`SessionPhase::Selecting`].
    pub fn acquire_items(&mut self, pool: impl IntoIterator<Item = P>) {
        self.clear_session();
        self.items.clear();
        self.by_identifier.clear();

        let wanted = self.config.effective_pool_size();
        for (index, payload) in pool.into_iter().take(wanted).enumerate() {
            let identifier = ItemIdentifier::from_index(index);
            self.by_identifier.insert(identifier, index);
            self.items.push(Item {
                identifier,
                payload,
            });
        }

        if self.items.len() < wanted {
            warn!(
                acquired = self.items.len(),
                wanted, "item pool is smaller than expected"
            );
        } else {
            info!(acquired = self.items.len(), "item pool acquired");
        }
    }

    /// Start asking questions.
    pub fn begin_session(&mut self) -> RitualResult<SessionPhase> {
        self.expect_phase("begin a session", SessionPhase::Selecting)?;
        self.clear_session();
        self.phase = SessionPhase::Questioning;
        debug!(
            candidates = self.candidates_for_current_question().len(),
            "ritual started"
        );
        Ok(self.phase)
    }

    /// Items shown for the current question: those whose identifier has bit
    /// `current_question` set.
    pub fn candidates_for_current_question(&self) -> Vec<&Item<P>> {
        self.candidates_for_question(self.current_question)
    }

    /// Items whose identifier has bit `question` set, in pool order.
    pub fn candidates_for_question(&self, question: u32) -> Vec<&Item<P>> {
        self.items
            .iter()
            .filter(|item| item.identifier.has_bit(question))
            .collect()
    }

    /// Record the answer to the current question and advance.
    ///
    /// Returns [`SessionPhase::Revealing`] after the last question, otherwise
    /// [`SessionPhase::Questioning`].
    pub fn submit_answer(&mut self, answer: impl Into<Answer>) -> RitualResult<SessionPhase> {
        self.expect_phase("answer", SessionPhase::Questioning)?;
        let answer = answer.into();

        if answer.is_yes() {
            self.answer_bitmask |= 1 << self.current_question;
        }
        self.answers.push(answer);
        self.current_question += 1;

        if self.current_question >= self.max_bits() {
            self.phase = SessionPhase::Revealing;
            match self.lookup() {
                Resolution::Found(item) => info!(identifier = %item.identifier, "card revealed"),
                Resolution::NotFound { bitmask } => info!(bitmask, "no card matches the answers"),
            }
        } else {
            debug!(
                question = self.current_question,
                candidates = self.candidates_for_current_question().len(),
                "next question"
            );
        }
        Ok(self.phase)
    }

    /// Look up the item spelled by the answers.
    ///
    /// Cheap enough to call every frame; the outcome is logged once, when the
    /// last answer comes in.
    pub fn resolve(&self) -> RitualResult<Resolution<'_, P>> {
        self.expect_phase("resolve", SessionPhase::Revealing)?;
        let resolution = self.lookup();
        trace!(bitmask = self.answer_bitmask, "resolved");
        Ok(resolution)
    }

    /// Drop the pool and all session state. Follow with [`Self::acquire_items`].
    pub fn reset(&mut self) {
        self.clear_session();
        self.items.clear();
        self.by_identifier.clear();
        debug!("ritual reset");
    }

    fn lookup(&self) -> Resolution<'_, P> {
        ItemIdentifier::new(self.answer_bitmask)
            .and_then(|identifier| self.item(identifier))
            .map_or(
                Resolution::NotFound {
                    bitmask: self.answer_bitmask,
                },
                Resolution::Found,
            )
    }

    fn clear_session(&mut self) {
        self.phase = SessionPhase::Selecting;
        self.current_question = 0;
        self.answer_bitmask = 0;
        self.answers.clear();
    }

    fn expect_phase(&self, action: &'static str, expected: SessionPhase) -> RitualResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RitualError::InvalidPhase {
                action,
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cards(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("card-{i}")).collect()
    }

    fn engine_with(n: usize) -> RitualEngine<String> {
        let mut engine = RitualEngine::default();
        engine.acquire_items(cards(n));
        engine
    }

    /// Answers whose bitmask equals `target`, lowest bit first.
    fn answers_for(target: u32, bits: u32) -> Vec<Answer> {
        (0..bits).map(|b| Answer::from(target & (1 << b) != 0)).collect()
    }

    fn play(engine: &mut RitualEngine<String>, answers: &[Answer]) {
        engine.begin_session().unwrap();
        for answer in answers {
            engine.submit_answer(*answer).unwrap();
        }
    }

    #[test]
    fn acquire_assigns_sequential_identifiers() {
        let engine = engine_with(20);
        assert_eq!(engine.items().len(), 20);
        for (i, item) in engine.items().iter().enumerate() {
            assert_eq!(item.identifier.value(), i as u32 + 1);
            assert_eq!(item.payload, format!("card-{}", i + 1));
        }
        assert_eq!(engine.phase(), SessionPhase::Selecting);
    }

    #[test]
    fn acquire_truncates_to_pool_size() {
        let engine = engine_with(52);
        assert_eq!(engine.items().len(), 20);
        assert!(engine.item(ItemIdentifier::new(21).unwrap()).is_none());
    }

    #[test]
    fn acquire_never_exceeds_identifier_capacity() {
        let mut engine = RitualEngine::new(RitualConfig::default().with_pool_size(100));
        engine.acquire_items(cards(52));
        assert_eq!(engine.items().len(), 31);
    }

    #[test]
    fn question_count_follows_clamped_config() {
        let mut engine = RitualEngine::new(RitualConfig::default().with_max_bits(40));
        engine.acquire_items(cards(300));
        assert_eq!(engine.max_bits(), 8);
        engine.begin_session().unwrap();
        for i in 0..40 {
            let result = engine.submit_answer(true);
            if i < 8 {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(RitualError::InvalidPhase { .. })));
            }
        }
        assert_eq!(engine.current_question(), 8);
        assert_eq!(engine.answer_bitmask(), 0xFF);
        assert_eq!(engine.questions_remaining(), 0);
        assert!(engine.resolve().unwrap().item().is_none()); // only 20 cards drawn
    }

    #[test]
    fn single_question_ritual() {
        let mut engine = RitualEngine::new(RitualConfig::default().with_max_bits(0));
        engine.acquire_items(cards(5));
        assert_eq!(engine.items().len(), 1);
        play(&mut engine, &[Answer::Yes]);
        assert_eq!(engine.phase(), SessionPhase::Revealing);
        assert_eq!(engine.resolve().unwrap().item().unwrap().payload, "card-1");
    }

    #[test]
    fn repeated_resolve_logs_outcome_once() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        struct CountInfo(Arc<AtomicUsize>);

        impl<S: Subscriber> Layer<S> for CountInfo {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == Level::INFO {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountInfo(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let mut engine = engine_with(20);
            engine.begin_session().unwrap();
            let before = count.load(Ordering::SeqCst);
            for answer in answers_for(3, 5) {
                engine.submit_answer(answer).unwrap();
            }
            assert_eq!(count.load(Ordering::SeqCst), before + 1);
            for _ in 0..100 {
                assert!(engine.resolve().unwrap().item().is_some());
            }
            assert_eq!(count.load(Ordering::SeqCst), before + 1);
        });
    }

    #[test]
    fn first_question_shows_odd_identifiers() {
        let mut engine = engine_with(20);
        engine.begin_session().unwrap();
        let ids: Vec<u32> = engine
            .candidates_for_current_question()
            .iter()
            .map(|i| i.identifier.value())
            .collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
    }

    #[test]
    fn last_question_group() {
        let engine = engine_with(20);
        let ids: Vec<u32> = engine
            .candidates_for_question(4)
            .iter()
            .map(|i| i.identifier.value())
            .collect();
        assert_eq!(ids, vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn yes_then_all_no_reveals_first_card() {
        let mut engine = engine_with(20);
        play(
            &mut engine,
            &[Answer::Yes, Answer::No, Answer::No, Answer::No, Answer::No],
        );
        assert_eq!(engine.answer_bitmask(), 1);
        let resolution = engine.resolve().unwrap();
        assert_eq!(resolution.item().unwrap().payload, "card-1");
    }

    #[test]
    fn all_no_is_not_found() {
        let mut engine = engine_with(20);
        play(&mut engine, &[Answer::No; 5]);
        assert_eq!(engine.answer_bitmask(), 0);
        assert_eq!(
            engine.resolve().unwrap(),
            Resolution::NotFound { bitmask: 0 }
        );
    }

    #[test]
    fn short_pool_misses_out_of_range_identifier() {
        let mut engine = engine_with(3);
        play(&mut engine, &answers_for(5, 5));
        assert_eq!(
            engine.resolve().unwrap(),
            Resolution::NotFound { bitmask: 5 }
        );
    }

    #[test]
    fn empty_pool_still_runs_a_session() {
        let mut engine = engine_with(0);
        play(&mut engine, &answers_for(3, 5));
        assert!(engine.candidates_for_question(0).is_empty());
        assert_eq!(
            engine.resolve().unwrap(),
            Resolution::NotFound { bitmask: 3 }
        );
    }

    #[test]
    fn phases_follow_the_ritual() {
        let mut engine = engine_with(20);
        assert_eq!(engine.begin_session().unwrap(), SessionPhase::Questioning);
        for _ in 0..4 {
            assert_eq!(
                engine.submit_answer(Answer::No).unwrap(),
                SessionPhase::Questioning
            );
        }
        assert_eq!(
            engine.submit_answer(Answer::Yes).unwrap(),
            SessionPhase::Revealing
        );
        assert_eq!(engine.questions_remaining(), 0);
        assert_eq!(engine.answers().len(), 5);
    }

    #[test]
    fn answering_after_reveal_is_rejected() {
        let mut engine = engine_with(20);
        play(&mut engine, &[Answer::No; 5]);
        let err = engine.submit_answer(Answer::Yes).unwrap_err();
        assert_eq!(
            err,
            RitualError::InvalidPhase {
                action: "answer",
                expected: SessionPhase::Questioning,
                actual: SessionPhase::Revealing,
            }
        );
        assert_eq!(engine.current_question(), 5);
    }

    #[test]
    fn answering_before_start_is_rejected() {
        let mut engine = engine_with(20);
        assert!(engine.submit_answer(true).is_err());
        assert_eq!(engine.current_question(), 0);
    }

    #[test]
    fn resolve_requires_reveal() {
        let mut engine = engine_with(20);
        engine.begin_session().unwrap();
        assert!(engine.resolve().is_err());
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut engine = engine_with(20);
        engine.begin_session().unwrap();
        assert!(engine.begin_session().is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = engine_with(20);
        play(&mut engine, &answers_for(9, 5));
        engine.reset();
        assert!(engine.items().is_empty());
        assert_eq!(engine.phase(), SessionPhase::Selecting);
        assert_eq!(engine.current_question(), 0);
        assert_eq!(engine.answer_bitmask(), 0);
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn error_message() {
        let engine = engine_with(1);
        let err = engine.resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot resolve while selecting; expected revealing"
        );
    }

    proptest! {
        #[test]
        fn every_identifier_resolves_to_its_item(pool in 1usize..=31, pick in 0usize..31) {
            let pick = pick % pool;
            let mut engine = RitualEngine::new(RitualConfig::default().with_pool_size(31));
            engine.acquire_items(cards(pool));
            let target = engine.items()[pick].identifier;
            play(&mut engine, &answers_for(target.value(), 5));
            let resolution = engine.resolve().unwrap();
            prop_assert_eq!(resolution.item().map(|i| i.identifier), Some(target));
        }

        #[test]
        fn question_counter_advances_by_one(answers in proptest::collection::vec(any::<bool>(), 0..12)) {
            let mut engine = engine_with(20);
            engine.begin_session().unwrap();
            for answer in answers {
                let before = engine.current_question();
                match engine.submit_answer(answer) {
                    Ok(_) => prop_assert_eq!(engine.current_question(), before + 1),
                    Err(_) => prop_assert_eq!(engine.current_question(), before),
                }
                prop_assert!(engine.current_question() <= engine.max_bits());
                prop_assert_eq!(engine.answer_bitmask() >> engine.current_question(), 0);
            }
        }

        #[test]
        fn candidate_groups_cover_each_set_bit_once(pool in 0usize..=40) {
            let engine = engine_with(pool);
            let mut seen: HashMap<ItemIdentifier, u32> = HashMap::new();
            for question in 0..engine.max_bits() {
                for item in engine.candidates_for_question(question) {
                    prop_assert!(item.identifier.has_bit(question));
                    *seen.entry(item.identifier).or_default() += 1;
                }
            }
            for item in engine.items() {
                prop_assert_eq!(seen.get(&item.identifier).copied().unwrap_or(0), item.identifier.set_bits());
            }
        }

        #[test]
        fn reacquiring_reproduces_identifiers(pool in 0usize..=30) {
            let mut engine = engine_with(pool);
            let first: Vec<(u32, String)> = engine.items().iter().map(|i| (i.identifier.value(), i.payload.clone())).collect();
            engine.reset();
            engine.acquire_items(cards(pool));
            let second: Vec<(u32, String)> = engine.items().iter().map(|i| (i.identifier.value(), i.payload.clone())).collect();
            prop_assert_eq!(first, second);
        }
    }
}
