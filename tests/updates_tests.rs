use std::io::Cursor;
use std::sync::mpsc;

use tree_scene::app::AppEvent;
use tree_scene::state::{LightsColor, Theme};
use tree_scene::updates::{forward_updates, parse_update};

fn received(rx: &mpsc::Receiver<AppEvent>) -> Vec<LightsColor> {
    rx.try_iter()
        .map(|event| match event {
            AppEvent::StateUpdated(state) => state.lights_color,
            other => panic!("unexpected event {:?}", other),
        })
        .collect()
}

#[cfg(test)]
mod parse_update_tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let state = parse_update(r#"  {"lights_color":"blue","theme":"silver"}  "#).unwrap();
        assert_eq!(state.lights_color, LightsColor::Blue);
        assert_eq!(state.theme, Theme::Silver);
    }

    #[test]
    fn test_parse_skips_blank_and_malformed() {
        assert!(parse_update("").is_none());
        assert!(parse_update("   ").is_none());
        assert!(parse_update("{").is_none());
        assert!(parse_update("lights=red").is_none());
    }
}

#[cfg(test)]
mod forward_updates_tests {
    use super::*;

    #[test]
    fn test_forwards_in_order() {
        let (tx, rx) = mpsc::channel();
        let input = "{\"lights_color\":\"red\"}\n{\"lights_color\":\"blue\"}\n{}\n";

        assert_eq!(forward_updates(Cursor::new(input), &tx), 3);
        assert_eq!(
            received(&rx),
            vec![LightsColor::Red, LightsColor::Blue, LightsColor::WarmWhite]
        );
    }

    #[test]
    fn test_bad_lines_do_not_stop_stream() {
        let (tx, rx) = mpsc::channel();
        let input = "garbage\n\n{\"lights_color\":\"blue\"}\n42\n";

        assert_eq!(forward_updates(Cursor::new(input), &tx), 1);
        assert_eq!(received(&rx), vec![LightsColor::Blue]);
    }

    #[test]
    fn test_stops_when_receiver_closes() {
        let (tx, rx) = mpsc::channel();
        drop(rx);

        assert_eq!(forward_updates(Cursor::new("{}\n{}\n"), &tx), 0);
    }

    #[test]
    fn test_empty_stream() {
        let (tx, rx) = mpsc::channel();
        assert_eq!(forward_updates(Cursor::new(""), &tx), 0);
        assert!(received(&rx).is_empty());
    }
}
