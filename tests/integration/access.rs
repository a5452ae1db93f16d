use libfraga::{error::ErrorCode, models::Role, AppError, Library};

use super::{login_as, setup, setup_with_student_and_book, ADMIN_EMAIL, ADMIN_PASSWORD};

#[test]
fn test_default_admin_exists() {
    let mut library = Library::new();
    let admin = library.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    assert_eq!(admin.user_id, "admin001");
    assert_eq!(admin.name, "Administrador");
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(library.current_user(), Some(admin));
}

#[test]
fn test_login_with_invalid_credentials() {
    let mut library = Library::new();
    assert!(library.login("wrong@email.com", "wrongpass").is_none());
    assert!(library.login(ADMIN_EMAIL, "wrongpass").is_none());
    assert!(library.current_user().is_none());
}

#[test]
fn test_failed_login_keeps_existing_session() {
    let (mut library, _clock) = setup();
    assert!(library.login(ADMIN_EMAIL, "nope").is_none());

    let current = library.current_user().unwrap();
    assert_eq!(current.user_id, "admin001");
    assert!(library.add_book("b001", "T", "A", "I", 1).is_ok());
}

#[test]
fn test_logout_is_idempotent() {
    let (mut library, _clock) = setup();
    library.logout();
    library.logout();
    assert!(library.current_user().is_none());
    assert!(matches!(
        library.add_book("b001", "T", "A", "I", 1),
        Err(AppError::Authorization(_))
    ));
}

#[test]
fn test_admin_can_register_user() {
    let (mut library, _clock) = setup();
    let user = library
        .register_user("u001", "João Silva", "joao@email.com", "senha123", Role::Student)
        .unwrap();
    assert_eq!(user.user_id, "u001");
    assert_eq!(user.created_at, super::start());
    assert!(library.repository().users.contains("u001"));
}

#[test]
fn test_register_duplicate_id_conflicts() {
    let (mut library, _clock) = setup();
    library
        .register_user("u001", "João", "joao@email.com", "x", Role::Student)
        .unwrap();
    let err = library
        .register_user("u001", "Maria", "maria@email.com", "y", Role::Student)
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.code(), ErrorCode::Duplicate);
    assert_eq!(library.get_user_info("u001").unwrap().name, "João");
}

#[test]
fn test_register_requires_admin() {
    let (mut library, _clock) = setup();
    library
        .register_user("l001", "Bibliotecário", "lib@email.com", "pass", Role::Librarian)
        .unwrap();
    library
        .register_user("s001", "Aluno", "aluno@email.com", "pass", Role::Student)
        .unwrap();

    for email in ["lib@email.com", "aluno@email.com"] {
        login_as(&mut library, email);
        let err = library
            .register_user("u002", "Outro", "outro@email.com", "pass", Role::Student)
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    library.logout();
    assert!(matches!(
        library.register_user("u002", "Outro", "outro@email.com", "pass", Role::Student),
        Err(AppError::Authorization(_))
    ));
    assert!(!library.repository().users.contains("u002"));
}

#[test]
fn test_librarian_can_add_book_student_cannot() {
    let (mut library, _clock) = setup_with_student_and_book();
    library
        .register_user("l001", "Bibliotecário", "lib@email.com", "pass", Role::Librarian)
        .unwrap();

    login_as(&mut library, "lib@email.com");
    let book = library.add_book("b002", "Refactoring", "Martin Fowler", "42", 3).unwrap();
    assert_eq!(book.available, 3);

    login_as(&mut library, "aluno@email.com");
    assert!(matches!(
        library.add_book("b003", "SICP", "Abelson", "7", 1),
        Err(AppError::Authorization(_))
    ));
}

#[test]
fn test_add_duplicate_book_conflicts() {
    let (mut library, _clock) = setup_with_student_and_book();
    let err = library.add_book("b001", "Other", "Other", "0", 9).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(library.get_book("b001").unwrap().quantity, 5);
}

#[test]
fn test_student_sees_only_own_data() {
    let (mut library, _clock) = setup_with_student_and_book();
    library
        .register_user("s002", "Aluno 2", "aluno2@email.com", "pass", Role::Student)
        .unwrap();

    login_as(&mut library, "aluno@email.com");
    let info = library.get_user_info("s001").unwrap();
    assert_eq!(info.user_id, "s001");
    assert_eq!(info.role, Role::Student);

    assert!(matches!(library.get_user_info("s002"), Err(AppError::Authorization(_))));
    assert!(matches!(library.get_user_info("admin001"), Err(AppError::Authorization(_))));
    assert!(matches!(library.list_users(), Err(AppError::Authorization(_))));
}

#[test]
fn test_get_user_info_unknown_id() {
    let (library, _clock) = setup();
    let err = library.get_user_info("ghost").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSuchUser);
}

#[test]
fn test_user_reads_after_logout() {
    let (mut library, _clock) = setup_with_student_and_book();
    library.create_loan("loan001", "s001", "b001").unwrap();
    library.logout();

    assert_eq!(library.get_user_info("s001").unwrap().name, "Aluno");
    let rows = library.report_books_by_student("s001").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].loan.loan_id, "loan001");

    let err = library.get_user_info("ghost").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSuchUser);
}

#[test]
fn test_staff_lists_users() {
    let (library, _clock) = setup_with_student_and_book();
    let ids: Vec<String> = library
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| u.user_id)
        .collect();
    assert_eq!(ids, ["admin001", "s001"]);
}

#[test]
fn test_reads_need_no_session() {
    let (mut library, _clock) = setup_with_student_and_book();
    library.logout();
    assert_eq!(library.list_books().len(), 1);
    assert_eq!(library.list_available_books().len(), 1);
    assert!(library.get_book("b001").is_some());
    assert!(library.get_book("b404").is_none());
}
