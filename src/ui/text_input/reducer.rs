use crate::ui::mvi::Reducer;
use crate::ui::text_input::intent::TextInputIntent;
use crate::ui::text_input::state::TextInputState;

pub struct TextInputReducer;

impl Reducer for TextInputReducer {
    type State = TextInputState;
    type Intent = TextInputIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let TextInputState {
            mut text,
            multiline,
        } = state;
        match intent {
            TextInputIntent::Insert('\n') if !multiline => {}
            TextInputIntent::Insert(ch) if ch.is_control() && ch != '\n' => {}
            TextInputIntent::Insert(ch) => text.push(ch),
            TextInputIntent::Paste(pasted) => {
                let pasted = pasted.replace("\r\n", "\n").replace('\r', "\n");
                if multiline {
                    text.push_str(&pasted);
                } else {
                    text.push_str(&pasted.replace('\n', " "));
                }
            }
            TextInputIntent::Backspace => {
                text.pop();
            }
            TextInputIntent::Clear => text.clear(),
        }
        TextInputState { text, multiline }
    }
}
