use super::*;

#[test]
fn buffer_handler_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("world");
    assert_eq!(handler.output(), "hello\nworld\n");
}

#[test]
fn buffer_handler_take_output_drains() {
    let handler = BufferPrintHandler::new();
    handler.println("1");
    assert_eq!(handler.take_output(), "1\n");
    assert_eq!(handler.output(), "");
    handler.println("2");
    assert_eq!(handler.take_output(), "2\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn shared_buffer_handler_is_visible_through_clones() {
    let handler = buffer_handler();
    let reader = Arc::clone(&handler);
    handler.println("test");
    assert_eq!(reader.output(), "test\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.output(), "");
    assert_eq!(handler.take_output(), "");
    handler.clear();
    handler.flush();
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.output(), "");
    handler.flush();
}

#[test]
fn buffer_handler_is_thread_safe() {
    use std::thread;

    let handler = buffer_handler();
    let handler2 = Arc::clone(&handler);

    let t1 = thread::spawn(move || {
        for _ in 0..100 {
            handler2.println("a");
        }
    });

    for _ in 0..100 {
        handler.println("b");
    }

    t1.join().unwrap();
    assert_eq!(handler.output().lines().count(), 200);
}
