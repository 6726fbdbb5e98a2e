use anyhow::anyhow;

/// Whether a faked driven port should behave as if its backing system is reachable.
/// Lets tests exercise the "store is down" paths without a real outage.
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    /// Return an error if the port is configured as disconnected
    pub fn blow_up_if_disconnected(&self) -> Result<(), anyhow::Error> {
        match self {
            Self::Connected => Ok(()),
            Self::Disconnected => Err(anyhow!("could not connect to the todo store!")),
        }
    }
}

/// FakeImplementation stands in for a single method on a mocked port: it records the arguments
/// of every call and hands back a preconfigured return value. Async trait methods don't play
/// well with the usual mocking crates, so mocks are written by hand on top of this.
///
/// * [Args] is whatever gets captured from a call (use a tuple for several arguments)
/// * [Ret] is the method's return type
///
/// # Example
///
/// ```ignore
/// struct MockTodoService {
///     item_by_id_result: FakeImplementation<i64, anyhow::Result<Option<TodoItem>>>,
/// }
///
/// impl TodoPort for Mutex<MockTodoService> {
///     async fn item_by_id(&self, item_id: i64, /* ... */) -> anyhow::Result<Option<TodoItem>> {
///         let mut locked_self = self.lock().unwrap();
///         locked_self.item_by_id_result.save_arguments(item_id);
///
///         locked_self.item_by_id_result.return_value_anyhow()
///     }
/// }
/// ```
pub struct FakeImplementation<Args, Ret> {
    saved_arguments: Vec<Args>,
    return_value: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            saved_arguments: Vec::new(),
            return_value: None,
        }
    }

    /// Records the arguments of a single invocation
    pub fn save_arguments(&mut self, arguments: Args) {
        self.saved_arguments.push(arguments)
    }

    /// Arguments of every invocation so far, oldest first
    pub fn calls(&self) -> &[Args] {
        self.saved_arguments.as_slice()
    }
}

impl<Args, Success, Fail> FakeImplementation<Args, Result<Success, Fail>>
where
    Success: Clone,
    Fail: Clone,
{
    /// Configures the [Result] handed back on every invocation
    pub fn set_returned_result(&mut self, return_value: Result<Success, Fail>) {
        self.return_value = Some(return_value)
    }

    pub fn return_value_result(&self) -> Result<Success, Fail> {
        match self.return_value {
            Some(Ok(ref ok_result)) => Ok(ok_result.clone()),
            Some(Err(ref err)) => Err(err.clone()),
            None => panic!("Tried to return from a function where the return value wasn't set!"),
        }
    }
}

impl<Args, Success> FakeImplementation<Args, anyhow::Result<Success>>
where
    Success: Clone,
{
    /// Same as [FakeImplementation::set_returned_result], but for [anyhow::Result]. [anyhow::Error]
    /// can't be cloned, so errors are replayed by their message.
    pub fn set_returned_anyhow(&mut self, return_value: anyhow::Result<Success>) {
        match return_value {
            Ok(ok_result) => self.return_value = Some(Ok(ok_result)),
            Err(err) => self.return_value = Some(Err(anyhow!(format!("{}", err)))),
        }
    }

    pub fn return_value_anyhow(&self) -> anyhow::Result<Success> {
        match self.return_value {
            None => panic!("Tried to return from a function where the value wasn't set!"),
            Some(Ok(ref ok_result)) => Ok(ok_result.clone()),
            Some(Err(ref err)) => Err(anyhow!(format!("{}", err))),
        }
    }
}
