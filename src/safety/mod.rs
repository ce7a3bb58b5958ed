// Safety gate: word-list profanity filtering.
//
// The ProfanityFilter trait is the seam between the mood classifier and
// whatever decides a sentence is unfit for display. WordlistFilter is the
// default: a lazily built, read-only lexicon shared by every request.

pub mod traits;
pub mod wordlist;
