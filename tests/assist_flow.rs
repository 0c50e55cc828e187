//! End-to-end flow over the analysis core: seeded checklist aggregation,
//! question/answer exchanges, and the compiled report.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rfp_assist::analysis::eligibility::sample_report;
use rfp_assist::analysis::risk::sample_assessment;
use rfp_assist::checklist::{ChecklistBoard, ChecklistFilter, sample_checklist};
use rfp_assist::error::QueryError;
use rfp_assist::qa::{
    CannedAnswerSource, QueryResponder, Role, ResponderConfig, default_bank, suggested_questions,
};
use rfp_assist::report::{ReportSummary, sample_profile};

fn instant_responder() -> Arc<QueryResponder> {
    let source = CannedAnswerSource::with_seed(
        default_bank(),
        ResponderConfig {
            response_delay: Duration::ZERO,
        },
        7,
    );
    QueryResponder::new(Arc::new(source))
}

#[test]
fn seeded_board_hits_the_documented_percentages() {
    let mut board = ChecklistBoard::new(sample_checklist()).unwrap();

    let stats = board.stats();
    assert_eq!(stats.total, 18);
    assert_eq!(stats.completed, 8);
    assert_eq!(stats.completion_pct, 44);

    let updated = board.toggle_completed("DOC-003").unwrap();
    assert!(updated.completed);
    assert_eq!(board.stats().completion_pct, 50);

    // And back again.
    board.toggle_completed("DOC-003").unwrap();
    assert_eq!(board.stats().completion_pct, 44);
}

#[test]
fn filters_partition_the_seeded_board() {
    let board = ChecklistBoard::new(sample_checklist()).unwrap();

    let ids = |filter: ChecklistFilter| -> HashSet<String> {
        board.filter(filter).into_iter().map(|i| i.id).collect()
    };

    let all = ids(ChecklistFilter::All);
    let completed = ids(ChecklistFilter::Completed);
    let pending = ids(ChecklistFilter::Pending);

    assert_eq!(all.len(), 18);
    assert!(completed.is_disjoint(&pending));
    assert_eq!(
        completed.union(&pending).cloned().collect::<HashSet<_>>(),
        all
    );
}

#[tokio::test]
async fn suggested_questions_each_hit_their_canned_answer() {
    let responder = instant_responder();
    let bank = default_bank();

    for (suggestion, expected) in suggested_questions().iter().zip(bank.answers()) {
        let reply = responder.submit(&suggestion.text).await.unwrap();
        assert_eq!(reply.content, expected.content);
        assert_eq!(reply.sources, expected.sources);
    }

    // Five question/answer pairs in order, user before assistant.
    let transcript = responder.transcript().await;
    assert_eq!(transcript.len(), 10);
    for pair in transcript.chunks(2) {
        assert_eq!(pair[0].role, Role::User);
        assert_eq!(pair[1].role, Role::Assistant);
    }
}

#[tokio::test]
async fn certification_question_selects_entry_three() {
    let responder = instant_responder();
    let reply = responder
        .submit("What certifications are required?")
        .await
        .unwrap();
    assert_eq!(reply.content, default_bank().answers()[3].content);
}

#[tokio::test]
async fn rejections_do_not_grow_the_transcript() {
    let source = CannedAnswerSource::with_seed(
        default_bank(),
        ResponderConfig {
            response_delay: Duration::from_millis(80),
        },
        7,
    );
    let responder = QueryResponder::new(Arc::new(source));

    assert_eq!(responder.submit(" ").await, Err(QueryError::EmptyQuestion));

    let inflight = {
        let responder = Arc::clone(&responder);
        tokio::spawn(async move { responder.submit("When is the deadline?").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(
        responder.submit("What is the timeline?").await,
        Err(QueryError::AnswerPending)
    );

    inflight.await.unwrap().unwrap();
    assert_eq!(responder.message_count().await, 2);
}

#[tokio::test]
async fn report_reflects_checklist_progress() {
    let mut board = ChecklistBoard::new(sample_checklist()).unwrap();
    let eligibility = sample_report();
    let risk = sample_assessment();

    let before = ReportSummary::compile(sample_profile(), &eligibility, &risk, &board.stats());
    assert_eq!(before.completion_score, 44);

    board.toggle_completed("DOC-003").unwrap();
    let after = ReportSummary::compile(sample_profile(), &eligibility, &risk, &board.stats());
    assert_eq!(after.completion_score, 50);

    let text = after.export(Duration::ZERO).await;
    assert!(text.contains("Eligibility 85%"));
    assert!(text.contains("Risk 25%"));
    assert!(text.contains("Completion 50%"));
}
