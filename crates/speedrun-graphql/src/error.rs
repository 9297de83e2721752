use async_graphql::ErrorExtensions;

/// Turns core errors into GraphQL errors carrying a `code` extension.
pub(crate) trait WithCode<T> {
    fn with_code(self) -> async_graphql::Result<T>;
}

impl<T> WithCode<T> for speedrun::Result<T> {
    fn with_code(self) -> async_graphql::Result<T> {
        self.map_err(|error| {
            let code = error.code();

            async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
                extensions.set("code", code.as_ref());
            })
        })
    }
}

pub(crate) fn invalid_argument(message: impl Into<String>) -> speedrun::Error {
    speedrun::Error::InvalidArgument(message.into())
}
