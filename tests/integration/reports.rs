use chrono::Duration;
use rust_decimal::Decimal;
use serde_json::Value;

use libfraga::{
    models::{to_record, Role},
    AppError,
};

use super::{login_as, setup, setup_with_student_and_book};

#[test]
fn test_student_sees_own_loans() {
    let (mut library, _clock) = setup_with_student_and_book();
    library.create_loan("loan001", "s001", "b001").unwrap();

    login_as(&mut library, "aluno@email.com");
    let loans = library.report_books_by_student("s001").unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].loan.loan_id, "loan001");
    assert_eq!(loans[0].book_title.as_deref(), Some("Clean Code"));
    assert_eq!(loans[0].book_author.as_deref(), Some("Robert Martin"));
}

#[test]
fn test_student_cannot_see_others_loans() {
    let (mut library, _clock) = setup_with_student_and_book();
    library
        .register_user("s002", "Aluno 2", "aluno2@email.com", "pass", Role::Student)
        .unwrap();

    login_as(&mut library, "aluno@email.com");
    assert!(matches!(
        library.report_books_by_student("s002"),
        Err(AppError::Authorization(_))
    ));
}

#[test]
fn test_staff_report_includes_returned_loans() {
    let (mut library, _clock) = setup_with_student_and_book();
    library.add_book("b002", "Refactoring", "Martin Fowler", "42", 1).unwrap();
    library.create_loan("loan001", "s001", "b001").unwrap();
    library.create_loan("loan002", "s001", "b002").unwrap();
    library.return_book("loan001").unwrap();

    let loans = library.report_books_by_student("s001").unwrap();
    let ids: Vec<&str> = loans.iter().map(|r| r.loan.loan_id.as_str()).collect();
    assert_eq!(ids, ["loan001", "loan002"]);
    assert!(loans[0].loan.return_date.is_some());
    assert!(library.report_books_by_student("nobody").unwrap().is_empty());
}

#[test]
fn test_report_overdue_books() {
    let (mut library, clock) = setup_with_student_and_book();
    library.create_loan("loan001", "s001", "b001").unwrap();
    clock.advance(Duration::days(10));
    library.create_loan("loan002", "s001", "b001").unwrap();
    clock.advance(Duration::days(10));

    let overdue = library.report_overdue_books().unwrap();
    assert_eq!(overdue.len(), 1);
    let row = &overdue[0];
    assert_eq!(row.loan.loan_id, "loan001");
    assert!(row.loan.is_overdue);
    assert_eq!(row.days_overdue, 6);
    assert_eq!(row.current_fine, Decimal::from(6));
    assert_eq!(row.loan.fine_amount, Decimal::ZERO);
    assert_eq!(row.student_name.as_deref(), Some("Aluno"));
    assert_eq!(row.book_title.as_deref(), Some("Clean Code"));

    clock.advance(Duration::days(3));
    let overdue = library.report_overdue_books().unwrap();
    assert_eq!(overdue[0].current_fine, Decimal::from(9));
}

#[test]
fn test_overdue_record_shape() {
    let (mut library, clock) = setup_with_student_and_book();
    library.create_loan("loan001", "s001", "b001").unwrap();
    clock.advance(Duration::days(20));

    let overdue = library.report_overdue_books().unwrap();
    let record = to_record(&overdue[0]).unwrap();
    assert_eq!(record["loan_id"], "loan001");
    assert_eq!(record["days_overdue"], 6);
    assert_eq!(record["return_date"], Value::Null);
    assert_eq!(record["fine_paid"], false);
    assert_eq!(record["student_name"], "Aluno");
    assert!(record.contains_key("current_fine"));
}

#[test]
fn test_student_cannot_see_overdue_report() {
    let (mut library, _clock) = setup_with_student_and_book();
    login_as(&mut library, "aluno@email.com");
    assert!(matches!(library.report_overdue_books(), Err(AppError::Authorization(_))));

    library.logout();
    assert!(matches!(library.report_overdue_books(), Err(AppError::Authorization(_))));
}

#[test]
fn test_popular_books() {
    let (mut library, _clock) = setup();
    library
        .register_user("s001", "Aluno", "aluno@email.com", "pass", Role::Student)
        .unwrap();
    library.add_book("b001", "Clean Code", "Robert Martin", "1", 5).unwrap();
    library.add_book("b002", "Refactoring", "Martin Fowler", "2", 5).unwrap();
    library.add_book("b003", "SICP", "Abelson", "3", 5).unwrap();

    library.create_loan("l1", "s001", "b001").unwrap();
    library.create_loan("l2", "s001", "b002").unwrap();
    library.create_loan("l3", "s001", "b002").unwrap();
    library.create_loan("l4", "s001", "b003").unwrap();

    let rows = library.report_popular_books(2).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].book_id, "b002");
    assert_eq!(rows[0].loan_count, 2);
    assert_eq!(rows[0].title.as_deref(), Some("Refactoring"));
    assert_eq!(rows[1].book_id, "b001");
    assert_eq!(rows[1].loan_count, 1);

    login_as(&mut library, "aluno@email.com");
    assert!(matches!(library.report_popular_books(10), Err(AppError::Authorization(_))));
}
