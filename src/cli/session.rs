//! Interactive menu session
//!
//! Reads a menu choice, collects the inputs for it into a [`Command`], runs
//! the command against the [`LibraryService`], and prints the outcome. User
//! mistakes are reported and the menu comes back; only a fatal error ends
//! the session early.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::display::{format_book_list, format_user_directory, format_user_list};
use crate::error::LibraryResult;
use crate::models::{BookId, UserId};
use crate::services::LibraryService;

use super::command::{Command, MenuChoice};
use super::prompt::Prompter;
use super::retry::{retry_bounded, Attempt, RetryOutcome};

/// Printed when the borrow/return prompts run out of retries
pub const TOO_MANY_ATTEMPTS: &str = "Too many attempts! Try again later.";

/// What the session should do after reading a menu choice
enum Step {
    Run(Command),
    /// Input was rejected; show the menu again
    Skip,
    /// Input ended
    Quit,
}

/// Inputs gathered by a retrying prompt
enum Gathered<T> {
    Ready(T),
    /// Retries ran out; show the menu again
    Skip,
    /// Input ended
    Quit,
}

impl<T> Gathered<T> {
    fn into_step(self, build: impl FnOnce(T) -> Command) -> Step {
        match self {
            Gathered::Ready(value) => Step::Run(build(value)),
            Gathered::Skip => Step::Skip,
            Gathered::Quit => Step::Quit,
        }
    }
}

/// One interactive session against a library
pub struct Session<'a, R, W> {
    service: &'a mut LibraryService,
    prompter: Prompter<R, W>,
    max_retries: u32,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(service: &'a mut LibraryService, input: R, output: W, max_retries: u32) -> Self {
        Self {
            service,
            prompter: Prompter::new(input, output),
            max_retries,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            let Some(choice) = self.read_menu_choice()? else {
                debug!("input closed");
                return Ok(());
            };
            self.prompter.say("")?;

            match self.read_command(choice)? {
                Step::Run(Command::Exit) => {
                    self.prompter.say("... Exiting the Program ...")?;
                    return Ok(());
                }
                Step::Run(command) => self.execute(command)?,
                Step::Skip => {}
                Step::Quit => return Ok(()),
            }
            self.prompter.say("")?;
        }
    }

    /// Run one command, printing its result.
    ///
    /// User-facing errors are printed; fatal ones are returned.
    pub fn execute(&mut self, command: Command) -> LibraryResult<()> {
        debug!(?command, "executing");
        match self.apply(command) {
            Ok(()) => Ok(()),
            Err(e) if e.is_fatal() => {
                error!(error = %e, "aborting session");
                Err(e)
            }
            Err(e) => self.prompter.say(format!("Error: {}", e)),
        }
    }

    fn apply(&mut self, command: Command) -> LibraryResult<()> {
        match command {
            Command::AddBook { name, id, quantity } => {
                self.service.add_book(&name, id, quantity)?;
            }
            Command::ListBooks => {
                let listing = format_book_list(self.service.list_books());
                self.prompter.write_raw(&listing)?;
            }
            Command::SearchBooks { prefix } => {
                let matches = self.service.search_by_prefix(&prefix);
                if matches.is_empty() {
                    self.prompter.say("No Match Found")?;
                } else {
                    let listing = format_book_list(matches);
                    self.prompter.write_raw(&listing)?;
                }
            }
            Command::AddUser { name, id } => {
                self.service.add_user(&name, id)?;
            }
            Command::BorrowBook { user, book } => {
                self.service.borrow_book(&user, &book)?;
                self.prompter.say(format!("{} borrowed '{}'", user, book))?;
            }
            Command::ReturnBook { user, book } => {
                self.service.return_book(&user, &book)?;
                self.prompter.say(format!("{} returned '{}'", user, book))?;
            }
            Command::UsersWhoBorrowed { book } => {
                let users = self.service.users_who_borrowed(&book);
                if users.is_empty() {
                    self.prompter.say("No one borrowed this book")?;
                } else {
                    self.prompter.say("List of users borrowed this book")?;
                    self.prompter.write_raw(&format_user_list(users))?;
                }
            }
            Command::ListUsers => {
                let entries: Vec<_> = self
                    .service
                    .list_users()
                    .iter()
                    .map(|user| (user, self.service.borrowed_books(user)))
                    .collect();
                let listing = format_user_directory(&entries);
                self.prompter.write_raw(&listing)?;
            }
            Command::Exit => {}
        }
        Ok(())
    }

    fn read_menu_choice(&mut self) -> LibraryResult<Option<MenuChoice>> {
        self.prompter.say("Program Options:")?;
        for choice in MenuChoice::ALL {
            self.prompter.say(choice.to_string())?;
        }

        let max = MenuChoice::max_number();
        let prompt = format!("-Enter your choice from (1 to {}) : ", max);
        let choice = self
            .prompter
            .ask_in_range(&prompt, 1..=max)?
            .and_then(MenuChoice::from_number);
        debug!(?choice, "menu choice");
        Ok(choice)
    }

    fn read_command(&mut self, choice: MenuChoice) -> LibraryResult<Step> {
        let p = &mut self.prompter;
        let step = match choice {
            MenuChoice::AddBook => {
                p.say("Enter book Info : ")?;
                let Some(name) = p.ask("Book Name : ")? else {
                    return Ok(Step::Quit);
                };
                let Some(id) = p.ask_number::<u64>("Book ID : ")? else {
                    return Ok(Step::Quit);
                };
                let Some(quantity) = p.ask_number::<u32>("Total quantity : ")? else {
                    return Ok(Step::Quit);
                };
                Step::Run(Command::AddBook {
                    name,
                    id: BookId::new(id),
                    quantity,
                })
            }
            MenuChoice::ListBooks => Step::Run(Command::ListBooks),
            MenuChoice::SearchBooks => match p.ask("Book name : ")? {
                Some(prefix) => Step::Run(Command::SearchBooks { prefix }),
                None => Step::Quit,
            },
            MenuChoice::AddUser => {
                p.say("Enter User Info : ")?;
                let Some(name) = p.ask("User Name : ")? else {
                    return Ok(Step::Quit);
                };
                let Some(id) = p.ask_number::<u64>("User Id : ")? else {
                    return Ok(Step::Quit);
                };
                Step::Run(Command::AddUser {
                    name,
                    id: UserId::new(id),
                })
            }
            MenuChoice::BorrowBook => self
                .read_user_and_book()?
                .into_step(|(user, book)| Command::BorrowBook { user, book }),
            MenuChoice::ReturnBook => self
                .read_user_and_book()?
                .into_step(|(user, book)| Command::ReturnBook { user, book }),
            MenuChoice::UsersWhoBorrowed => match p.ask("Book Name : ")? {
                Some(book) if self.service.find_book(&book).is_none() => {
                    p.say("Invalid book name!")?;
                    Step::Skip
                }
                Some(book) => Step::Run(Command::UsersWhoBorrowed { book }),
                None => Step::Quit,
            },
            MenuChoice::ListUsers => Step::Run(Command::ListUsers),
            MenuChoice::Exit => Step::Run(Command::Exit),
        };
        Ok(step)
    }

    /// Collect an existing user name and book name, retrying on unknown names
    fn read_user_and_book(&mut self) -> LibraryResult<Gathered<(String, String)>> {
        let service = &*self.service;
        let prompter = &mut self.prompter;

        let outcome = retry_bounded(self.max_retries, || {
            prompter.say("Enter User Name and Book Name : ")?;

            let Some(user) = prompter.ask("User Name : ")? else {
                return Ok(Attempt::Abort);
            };
            if service.find_user(&user).is_none() {
                prompter.say("Invalid User Name!")?;
                return Ok(Attempt::Retry);
            }

            let Some(book) = prompter.ask("Book Name : ")? else {
                return Ok(Attempt::Abort);
            };
            if service.find_book(&book).is_none() {
                prompter.say("Invalid book name!")?;
                return Ok(Attempt::Retry);
            }

            Ok(Attempt::Done((user, book)))
        })?;

        match outcome {
            RetryOutcome::Success(names) => Ok(Gathered::Ready(names)),
            RetryOutcome::Exhausted => {
                self.prompter.say(TOO_MANY_ATTEMPTS)?;
                Ok(Gathered::Skip)
            }
            RetryOutcome::Aborted => Ok(Gathered::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a full session over `input` and return everything it printed
    fn run_session(service: &mut LibraryService, input: &str) -> String {
        let mut output = Vec::new();
        Session::new(service, Cursor::new(input.to_string()), &mut output, 3)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn demo() -> LibraryService {
        LibraryService::with_demo_data().unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let mut service = demo();
        let output = run_session(&mut service, "9\n");
        assert!(output.contains("Program Options:"));
        assert!(output.contains("1) Add book"));
        assert!(output.contains("9) Exit the program"));
        assert!(output.contains("... Exiting the Program ..."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut service = demo();
        let output = run_session(&mut service, "");
        assert!(!output.contains("Exiting"));
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let mut service = demo();
        let output = run_session(&mut service, "hello\n0\n9\n");
        assert!(output.contains("Please enter a valid integer"));
        assert!(output.contains("Invalid range"));
        assert!(output.contains("Exiting"));
    }

    #[test]
    fn test_add_book_and_list() {
        let mut service = demo();
        let output = run_session(&mut service, "1\nDune\n7\n4\n2\n9\n");
        assert!(output.contains("Dune"));
        assert_eq!(service.book(BookId::new(7)).unwrap().total_quantity(), 4);
        assert!(!output.contains("Error"));
    }

    #[test]
    fn test_add_book_duplicate_id_prints_error() {
        let mut service = demo();
        let output = run_session(&mut service, "1\nOther\n9921\n3\n9\n");
        assert!(output.contains("Error: Book with ID 9921 is already in the system"));
        assert_eq!(service.list_books().len(), 3);
    }

    #[test]
    fn test_add_user_duplicate_id_prints_error() {
        let mut service = demo();
        let output = run_session(&mut service, "4\nMostafa Two\n112\n9\n");
        assert!(output.contains("Error: User with ID 112 is already in the system"));
        assert_eq!(service.list_users().len(), 3);
    }

    #[test]
    fn test_search_by_prefix() {
        let mut service = demo();
        let output = run_session(&mut service, "3\nTest\n3\nXyz\n9\n");
        assert!(output.contains("Test1"));
        assert!(output.contains("Test3"));
        assert!(output.contains("No Match Found"));
    }

    #[test]
    fn test_borrow_and_return_flow() {
        let mut service = demo();
        let output = run_session(
            &mut service,
            "5\nAhmed\nTest2\n6\nAhmed\nTest2\n6\nAhmed\nTest2\n9\n",
        );
        assert!(output.contains("Ahmed borrowed 'Test2'"));
        assert!(output.contains("Ahmed returned 'Test2'"));
        assert!(output.contains("Error: Ahmed didn't borrow 'Test2'"));
        assert_eq!(service.find_book("Test2").unwrap().borrowed_count(), 0);
    }

    #[test]
    fn test_borrow_retries_then_gives_up() {
        let mut service = demo();
        let output = run_session(&mut service, "5\nX\nY\nZ\nW\n9\n");
        assert_eq!(output.matches("Invalid User Name!").count(), 4);
        assert!(output.contains(TOO_MANY_ATTEMPTS));
        assert!(output.contains("Exiting"));
    }

    #[test]
    fn test_borrow_recovers_after_bad_book_name() {
        let mut service = demo();
        let output = run_session(&mut service, "5\nKhaled\nNope\nKhaled\nTest1\n9\n");
        assert!(output.contains("Invalid book name!"));
        assert!(output.contains("Khaled borrowed 'Test1'"));
        assert_eq!(service.find_book("Test1").unwrap().borrowed_count(), 1);
    }

    #[test]
    fn test_borrow_when_no_copies_left() {
        let mut service = demo();
        let output = run_session(
            &mut service,
            "5\nMostafa\nTest2\n5\nAhmed\nTest2\n5\nKhaled\nTest2\n9\n",
        );
        assert!(output.contains("Error: No copies of 'Test2' available"));
        assert_eq!(service.find_book("Test2").unwrap().borrowed_count(), 2);
    }

    #[test]
    fn test_users_who_borrowed() {
        let mut service = demo();
        let output = run_session(&mut service, "7\nTest3\n5\nKhaled\nTest3\n7\nTest3\n7\nNope\n9\n");
        assert!(output.contains("No one borrowed this book"));
        assert!(output.contains("List of users borrowed this book"));
        assert!(output.contains("User Name : Khaled"));
        assert!(output.contains("Invalid book name!"));
    }

    #[test]
    fn test_list_users_shows_borrowed_books() {
        let mut service = demo();
        let output = run_session(&mut service, "5\nAhmed\nTest1\n8\n9\n");
        assert!(output.contains("User Name : Mostafa"));
        assert!(output.contains("Borrowed books :"));
        assert!(output.contains("\tBook Name : Test1"));
    }

    #[test]
    fn test_execute_returns_fatal_error_unprinted() {
        let mut service = demo();
        service
            .link_without_copy(UserId::new(32), BookId::new(9921))
            .unwrap();

        let mut output = Vec::new();
        let mut session = Session::new(&mut service, Cursor::new(String::new()), &mut output, 3);
        let err = session
            .execute(Command::ReturnBook {
                user: "Ahmed".into(),
                book: "Test1".into(),
            })
            .unwrap_err();
        drop(session);

        assert!(err.is_fatal());
        assert!(!String::from_utf8(output).unwrap().contains("Error:"));
    }

    #[test]
    fn test_fatal_error_ends_run() {
        let mut service = demo();
        service
            .link_without_copy(UserId::new(32), BookId::new(9921))
            .unwrap();

        let mut output = Vec::new();
        let result = Session::new(
            &mut service,
            Cursor::new("6\nAhmed\nTest1\n9\n".to_string()),
            &mut output,
            3,
        )
        .run();

        assert!(result.unwrap_err().is_fatal());
        assert!(!String::from_utf8(output).unwrap().contains("Exiting the Program"));
    }

    #[test]
    fn test_execute_surfaces_fatal_errors_only() {
        let mut service = demo();
        let mut output = Vec::new();
        let mut session = Session::new(&mut service, Cursor::new(String::new()), &mut output, 3);

        session
            .execute(Command::ReturnBook {
                user: "Ahmed".into(),
                book: "Test1".into(),
            })
            .unwrap();
        session
            .execute(Command::AddUser {
                name: "   ".into(),
                id: UserId::new(5),
            })
            .unwrap();
        drop(session);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("didn't borrow"));
        assert!(text.contains("Validation error"));
    }
}
