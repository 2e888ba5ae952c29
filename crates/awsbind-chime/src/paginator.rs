//! Page iteration for the paginated list operations.
//!
//! Each helper calls the operation, hands every page to a callback together
//! with a `last_page` flag, and follows `NextToken` until the service stops
//! returning one or the callback returns `false`. The first error ends the
//! iteration and is returned.

use std::future::Future;

use awsbind_chime_model::{
    input::{
        ListAccountsInput, ListPhoneNumberOrdersInput, ListPhoneNumbersInput, ListUsersInput,
        ListVoiceConnectorsInput,
    },
    output::{
        ListAccountsOutput, ListPhoneNumberOrdersOutput, ListPhoneNumbersOutput, ListUsersOutput,
        ListVoiceConnectorsOutput,
    },
};
use awsbind_http::SdkError;
use tracing::{debug, warn};

use crate::api::ChimeApi;

/// A list input that accepts a continuation token.
trait PagedInput: Clone {
    fn set_next_token(&mut self, token: Option<String>);
}

/// A list output that may carry a continuation token.
trait PagedOutput {
    fn next_token(&self) -> Option<&str>;
}

macro_rules! paged {
    ($($input:ty => $output:ty;)*) => {
        $(
            impl PagedInput for $input {
                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }
            }

            impl PagedOutput for $output {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )*
    };
}

paged! {
    ListAccountsInput => ListAccountsOutput;
    ListPhoneNumberOrdersInput => ListPhoneNumberOrdersOutput;
    ListPhoneNumbersInput => ListPhoneNumbersOutput;
    ListUsersInput => ListUsersOutput;
    ListVoiceConnectorsInput => ListVoiceConnectorsOutput;
}

async fn paginate<I, O, C, Fut, F>(
    operation: &str,
    mut input: I,
    mut call: C,
    mut on_page: F,
) -> Result<(), SdkError>
where
    I: PagedInput,
    O: PagedOutput,
    C: FnMut(I) -> Fut,
    Fut: Future<Output = Result<O, SdkError>>,
    F: FnMut(&O, bool) -> bool,
{
    let mut pages = 0_usize;
    let mut sent_token: Option<String> = None;
    loop {
        let page = call(input.clone()).await?;
        pages += 1;

        let next = page.next_token().filter(|t| !t.is_empty()).map(str::to_owned);
        if next.is_some() && next == sent_token {
            warn!(operation, pages, "Service repeated the same NextToken, stopping");
            on_page(&page, true);
            return Ok(());
        }

        let last_page = next.is_none();
        if !on_page(&page, last_page) || last_page {
            debug!(operation, pages, last_page, "Pagination finished");
            return Ok(());
        }
        input.set_next_token(next.clone());
        sent_token = next;
    }
}

/// Iterate the pages of `ListAccounts`.
///
/// # Errors
/// Returns the first error of any page request.
pub async fn list_accounts_pages<F>(
    api: &dyn ChimeApi,
    input: ListAccountsInput,
    on_page: F,
) -> Result<(), SdkError>
where
    F: FnMut(&ListAccountsOutput, bool) -> bool,
{
    paginate("ListAccounts", input, |i| api.list_accounts(i), on_page).await
}

/// Iterate the pages of `ListPhoneNumberOrders`.
///
/// # Errors
/// Returns the first error of any page request.
pub async fn list_phone_number_orders_pages<F>(
    api: &dyn ChimeApi,
    input: ListPhoneNumberOrdersInput,
    on_page: F,
) -> Result<(), SdkError>
where
    F: FnMut(&ListPhoneNumberOrdersOutput, bool) -> bool,
{
    paginate(
        "ListPhoneNumberOrders",
        input,
        |i| api.list_phone_number_orders(i),
        on_page,
    )
    .await
}

/// Iterate the pages of `ListPhoneNumbers`.
///
/// # Errors
/// Returns the first error of any page request.
pub async fn list_phone_numbers_pages<F>(
    api: &dyn ChimeApi,
    input: ListPhoneNumbersInput,
    on_page: F,
) -> Result<(), SdkError>
where
    F: FnMut(&ListPhoneNumbersOutput, bool) -> bool,
{
    paginate("ListPhoneNumbers", input, |i| api.list_phone_numbers(i), on_page).await
}

/// Iterate the pages of `ListUsers`.
///
/// # Errors
/// Returns the first error of any page request.
pub async fn list_users_pages<F>(
    api: &dyn ChimeApi,
    input: ListUsersInput,
    on_page: F,
) -> Result<(), SdkError>
where
    F: FnMut(&ListUsersOutput, bool) -> bool,
{
    paginate("ListUsers", input, |i| api.list_users(i), on_page).await
}

/// Iterate the pages of `ListVoiceConnectors`.
///
/// # Errors
/// Returns the first error of any page request.
pub async fn list_voice_connectors_pages<F>(
    api: &dyn ChimeApi,
    input: ListVoiceConnectorsInput,
    on_page: F,
) -> Result<(), SdkError>
where
    F: FnMut(&ListVoiceConnectorsOutput, bool) -> bool,
{
    paginate(
        "ListVoiceConnectors",
        input,
        |i| api.list_voice_connectors(i),
        on_page,
    )
    .await
}

#[cfg(test)]
mod tests {
    use awsbind_chime_model::types::{Account, User};
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::api::MockChimeApi;

    fn accounts_page(names: &[&str], next: Option<&str>) -> ListAccountsOutput {
        ListAccountsOutput {
            accounts: names
                .iter()
                .map(|n| Account {
                    name: Some((*n).to_owned()),
                    ..Account::default()
                })
                .collect(),
            next_token: next.map(str::to_owned),
        }
    }

    fn token(t: &str) -> ListAccountsInput {
        ListAccountsInput {
            next_token: Some(t.to_owned()),
            max_results: Some(2),
            ..ListAccountsInput::default()
        }
    }

    #[tokio::test]
    async fn test_should_follow_next_token_until_last_page() {
        let mut api = MockChimeApi::new();
        let mut seq = Sequence::new();
        api.expect_list_accounts()
            .with(eq(ListAccountsInput {
                max_results: Some(2),
                ..ListAccountsInput::default()
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(accounts_page(&["a", "b"], Some("t1"))));
        api.expect_list_accounts()
            .with(eq(token("t1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(accounts_page(&["c", "d"], Some("t2"))));
        api.expect_list_accounts()
            .with(eq(token("t2")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(accounts_page(&["e"], None)));

        let mut seen = Vec::new();
        let mut flags = Vec::new();
        list_accounts_pages(
            &api,
            ListAccountsInput {
                max_results: Some(2),
                ..ListAccountsInput::default()
            },
            |page, last_page| {
                seen.extend(page.accounts.iter().filter_map(|a| a.name.clone()));
                flags.push(last_page);
                true
            },
        )
        .await
        .unwrap();

        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(flags, vec![false, false, true]);
    }

    #[tokio::test]
    async fn test_should_stop_when_callback_returns_false() {
        let mut api = MockChimeApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|_| {
                Ok(ListUsersOutput {
                    users: vec![User::default()],
                    next_token: Some("more".into()),
                })
            });

        let mut calls = 0;
        list_users_pages(
            &api,
            ListUsersInput {
                account_id: Some("a".into()),
                ..ListUsersInput::default()
            },
            |_, last_page| {
                calls += 1;
                assert!(!last_page);
                false
            },
        )
        .await
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_should_treat_empty_token_as_last_page() {
        let mut api = MockChimeApi::new();
        api.expect_list_voice_connectors()
            .times(1)
            .returning(|_| {
                Ok(ListVoiceConnectorsOutput {
                    voice_connectors: vec![],
                    next_token: Some(String::new()),
                })
            });

        let mut last = None;
        list_voice_connectors_pages(&api, ListVoiceConnectorsInput::default(), |_, l| {
            last = Some(l);
            true
        })
        .await
        .unwrap();
        assert_eq!(last, Some(true));
    }

    #[tokio::test]
    async fn test_should_return_first_error() {
        let mut api = MockChimeApi::new();
        let mut seq = Sequence::new();
        api.expect_list_phone_numbers()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(ListPhoneNumbersOutput {
                    phone_numbers: vec![],
                    next_token: Some("t1".into()),
                })
            });
        api.expect_list_phone_numbers()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SdkError::Timeout));

        let mut pages = 0;
        let result = list_phone_numbers_pages(&api, ListPhoneNumbersInput::default(), |_, _| {
            pages += 1;
            true
        })
        .await;
        assert!(matches!(result, Err(SdkError::Timeout)));
        assert_eq!(pages, 1);
    }

    #[tokio::test]
    async fn test_should_stop_on_repeated_token() {
        let mut api = MockChimeApi::new();
        api.expect_list_phone_number_orders()
            .times(2)
            .returning(|_| {
                Ok(ListPhoneNumberOrdersOutput {
                    phone_number_orders: vec![],
                    next_token: Some("same".into()),
                })
            });

        let mut flags = Vec::new();
        list_phone_number_orders_pages(&api, ListPhoneNumberOrdersInput::default(), |_, l| {
            flags.push(l);
            true
        })
        .await
        .unwrap();
        assert_eq!(flags, vec![false, true]);
    }
}
