//! Story text.
//!
//! Fixed prose shown by the REPL handlers. Nothing here affects control flow
//! except [`INTRO_PASSPHRASE`], which the intro gate compares against.

/// What the player must type to get past the intro.
pub const INTRO_PASSPHRASE: &str = "magnifying glass";

pub const WELCOME: &[&str] = &[
    "Ah, welcome Detective. Come to help solve the murder of Sir Augustus?\n....",
    "Perfect! We have all Suspects in the Lounge which is to the North of the Study.",
    "I will keep this room secure and you can go around the house checking for any clues.",
];

pub const HOW_TO_PLAY: &[&str] = &[
    "Move by typing a direction: \"north\", \"south\", \"east\", or \"west\".",
    "Interact with items by typing their name (e.g., \"Letter\").",
    "Type \"inventory\" to see your collected clues.",
    "Type \"look\" to see the room description again.",
    "Type \"quit\" to leave the game early.",
];

pub const INTRO_PROMPT: &str =
    "Every detective needs their trusty \"Magnifying Glass\". Try typing that in now to take mine: ";
pub const INTRO_RETRY: &str = "That's not it. Try again.";

/// Confirmation once the passphrase is given. `{clues}` is the total clue count.
pub fn intro_success(clues: usize) -> Vec<String> {
    vec![
        "Fantastic! Now you should be able to find those clues!".to_string(),
        format!("Remember, there should be {clues} clues scattered around the house."),
        "Make sure you do not enter the Lounge until after you find all the clues.".to_string(),
        "That is where we are holding the suspects; Sir Augustus's son Duncan and his Butler Justin.".to_string(),
    ]
}

pub const ACTION_PROMPT: &str = "What would you like to do?: ";
pub const INVALID_COMMAND: &str = "Please enter a valid command or item name.";
pub const NO_EXIT: &str = "You can't go that way.";
pub const COMMAND_CANCELED: &str = "Command canceled.";
pub const QUIT_MESSAGE: &str = "You decide to leave the case for another day.";
pub const CLOSING: &str = "Thanks for playing!";

pub const GATE_OPEN: &str = "You have all the clues. It's time to face the suspects.";

pub fn gate_denied(clues: usize) -> String {
    format!("You feel you aren't ready to enter the lounge yet. You need all {clues} clues first.")
}

pub fn item_taken(name: &str) -> String {
    format!("You take the suspicious {name} and add it to your Inventory.")
}

pub const DETECTIVE_ENTERS: &[&str] = &[
    "The Detective enters the room from behind you.",
    "Ah, I see you have found all of the clues you needed?",
    "So you discovered; a Letter, a Red Ink Vial, the Police Report, a Crumpled Note, a Bloody Knife, and a Handkerchief?",
    "Well in that case, what do you make of all of it?",
];

pub const ACCUSE_PROMPT: &str = "Do you think it was \"Justin\" or \"Duncan\" who killed him?: ";
pub const ACCUSE_RETRY: &str = "I did not quite catch that, could you speak up?";

pub const DUNCAN_BRANCH: &[&str] = &[
    "Duncan? Yes that could be...",
    "Duncan could have written the threatening note and put the Red Ink inside the supply closet to frame the Butler.",
    "In addition, perhaps the Sleeping Pills on this Crumpled Note could have been to murder his father!",
    "...But why would he have hidden the Bloody Knife in his own closet?",
    "And the Handkerchief at the crime scene does not make sense either... as well signing his own name to the note...",
    "Oh well that is for the courts to decide the important thing is you gathered all these clues!",
    "Thank you for your hard work and congratulations!",
];

pub const JUSTIN_BRANCH: &[&str] = &[
    "Justin? Yes that could be...",
    "Justin could have written the threatening note and signed it as Duncan to frame him, the Red Ink was with his stuff after all!",
    "The Red Ink does not match the writing on this Crumpled Note you found from Duncan either.",
    "In addition we know that Sir Augustus was killed by poison and not from a stab wound from the Police Report...",
    "So the Bloody Knife makes no sense to be in the closet unless it too was put their to frame Duncan!",
    "Finally, this Handkerchief at the scene of the crime has a \"J\" and NOT a \"D\" on it.",
    "I do believe you have solved the case!!!",
    "Thank you for your hard work uncovering the true killer and congratulations!",
];
