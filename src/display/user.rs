//! User display formatting

use crate::models::{Book, User};

use super::book::format_book_line;

/// Format one user as a single line
pub fn format_user_line(user: &User) -> String {
    format!("User Name : {:20} -Id : {}", user.name, user.id)
}

/// Format a user followed by the books they hold
pub fn format_user_details(user: &User, borrowed: &[&Book]) -> String {
    let mut output = format_user_line(user);
    output.push('\n');

    if !borrowed.is_empty() {
        output.push_str("Borrowed books :\n");
        for book in borrowed {
            output.push_str(&format!("\t{}\n", format_book_line(book)));
        }
    }

    output
}

/// Format a list of users, one line each
pub fn format_user_list<'a, I>(users: I) -> String
where
    I: IntoIterator<Item = &'a User>,
{
    let mut output = String::new();
    for user in users {
        output.push_str(&format_user_line(user));
        output.push('\n');
    }

    if output.is_empty() {
        return "No users found.\n".to_string();
    }
    output
}

/// Format every user with the books they hold
pub fn format_user_directory(entries: &[(&User, Vec<&Book>)]) -> String {
    if entries.is_empty() {
        return "No users found.\n".to_string();
    }

    entries
        .iter()
        .map(|(user, borrowed)| format_user_details(user, borrowed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookId, UserId};

    #[test]
    fn test_format_user_line() {
        let user = User::new(UserId::new(112), "Mostafa");
        let line = format_user_line(&user);
        assert!(line.starts_with("User Name : Mostafa"));
        assert!(line.ends_with("-Id : 112"));
    }

    #[test]
    fn test_format_user_details_with_books() {
        let mut user = User::new(UserId::new(32), "Ahmed");
        let book = Book::new(BookId::new(9921), "Test1", 12);
        user.borrow(book.id);

        let output = format_user_details(&user, &[&book]);
        assert!(output.contains("Ahmed"));
        assert!(output.contains("Borrowed books :"));
        assert!(output.contains("\tBook Name : Test1"));
    }

    #[test]
    fn test_format_user_details_without_books() {
        let user = User::new(UserId::new(2), "Khaled");
        let output = format_user_details(&user, &[]);
        assert!(!output.contains("Borrowed books"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_format_user_list() {
        let users = vec![
            User::new(UserId::new(112), "Mostafa"),
            User::new(UserId::new(32), "Ahmed"),
        ];
        let output = format_user_list(&users);
        assert_eq!(output.lines().count(), 2);

        assert!(format_user_list(std::iter::empty::<&User>()).contains("No users found"));
    }

    #[test]
    fn test_format_user_directory() {
        let mut ahmed = User::new(UserId::new(32), "Ahmed");
        let khaled = User::new(UserId::new(2), "Khaled");
        let book = Book::new(BookId::new(9921), "Test1", 12);
        ahmed.borrow(book.id);

        let output = format_user_directory(&[(&ahmed, vec![&book]), (&khaled, Vec::new())]);
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("\tBook Name : Test1"));
        assert!(output.ends_with("-Id : 2\n"));

        assert_eq!(format_user_directory(&[]), "No users found.\n");
    }
}
