//! Parser dei comandi testuali del client

use crate::api::RecipeFields;
use std::fmt;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  list                                    show recipes and collections
  submit <name> | <ingredients> | <steps> add a recipe, or update the one being edited
  submit                                  resubmit the form as loaded by `edit`
  edit <id>                               load a recipe into the form
  cancel                                  leave edit mode
  delete <id>                             delete a recipe
  collection <name>                       create a collection
  delete-collection <id>                  delete a collection
  link <recipe> | <collection>            add a recipe to a collection
  help                                    show this text
  quit                                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Submit(Option<RecipeFields>),
    Edit(i64),
    Cancel,
    Delete(i64),
    NewCollection(String),
    DeleteCollection(i64),
    Link { recipe: String, collection: String },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(name) => write!(f, "unknown command `{}` (try `help`)", name),
            ParseError::Usage(usage) => write!(f, "usage: {}", usage),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        match name {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "cancel" => Ok(Command::Cancel),
            "edit" => parse_id(rest, "edit <id>").map(Command::Edit),
            "delete" => parse_id(rest, "delete <id>").map(Command::Delete),
            "delete-collection" => {
                parse_id(rest, "delete-collection <id>").map(Command::DeleteCollection)
            }
            "collection" => {
                if rest.is_empty() {
                    Err(ParseError::Usage("collection <name>"))
                } else {
                    Ok(Command::NewCollection(rest.to_string()))
                }
            }
            "submit" => {
                if rest.is_empty() {
                    return Ok(Command::Submit(None));
                }
                match split_parts(rest).as_slice() {
                    [name, ingredients, instructions] => Ok(Command::Submit(Some(
                        RecipeFields::new(*name, *ingredients, *instructions),
                    ))),
                    _ => Err(ParseError::Usage("submit <name> | <ingredients> | <steps>")),
                }
            }
            "link" => match split_parts(rest).as_slice() {
                [recipe, collection] if !recipe.is_empty() && !collection.is_empty() => {
                    Ok(Command::Link {
                        recipe: recipe.to_string(),
                        collection: collection.to_string(),
                    })
                }
                _ => Err(ParseError::Usage("link <recipe> | <collection>")),
            },
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(rest: &str, usage: &'static str) -> Result<i64, ParseError> {
    rest.parse().map_err(|_| ParseError::Usage(usage))
}

fn split_parts(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}
