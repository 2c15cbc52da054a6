use std::sync::Arc;

use super::*;
use crate::core::error::AppError;
use crate::core::mock::{cart_item, Call, MockApiService};
use crate::services::session::Session;

fn app_with(api: &Arc<MockApiService>, token: Option<&str>) -> App {
    App::new(api.clone(), Arc::new(Session::in_memory(token)))
}

async fn open_cart(app: &mut App) {
    app.navigate(Route::Cart, RouteParams::default());
    app.settle().await;
}

fn last_notice(app: &mut App) -> Notice {
    app.take_notices().pop().expect("a notice")
}

// ----- checkout -----

#[tokio::test]
async fn test_checkout_without_session_prompts_login() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    assert_eq!(app.state.read().prompt, Some(Prompt::LoginRequired));
    assert_eq!(api.calls(), vec![Call::GetCart]);
    assert_eq!(app.state.read().cart.items.data().map(Vec::len), Some(2));

    app.resolve_prompt(PromptChoice::GoToLogin);
    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(app.state.read().prompt, None);
}

#[tokio::test]
async fn test_checkout_cancel_keeps_cart_screen() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.resolve_prompt(PromptChoice::Cancel);

    assert_eq!(app.current_route(), Route::Cart);
    assert_eq!(app.state.read().prompt, None);
}

#[tokio::test]
async fn test_checkout_success_clears_cart_once() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    assert_eq!(
        api.calls(),
        vec![
            Call::GetCart,
            Call::SubmitOrder { token: "tok".into(), item_count: 2 },
            Call::ClearCart { token: Some("tok".into()) },
        ]
    );
    let state = app.state.read();
    assert_eq!(state.cart.items.data().map(Vec::len), Some(0));
    assert!(!state.cart.checkout_in_flight);
    assert_eq!(state.notices.last().map(|n| n.level), Some(NoticeLevel::Success));
}

#[tokio::test]
async fn test_checkout_rejected_shows_server_message() {
    let api = Arc::new(MockApiService::new());
    api.fail_submit_order(AppError::Api { status: 400, message: Some("estoque insuficiente".into()) });
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    let notice = last_notice(&mut app);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "estoque insuficiente");
    assert_eq!(api.count(|c| matches!(c, Call::ClearCart { .. })), 0);
    assert_eq!(app.state.read().cart.items.data().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_checkout_rejected_without_message_uses_default() {
    let api = Arc::new(MockApiService::new());
    api.fail_submit_order(AppError::Api { status: 500, message: None });
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    assert_eq!(last_notice(&mut app).message, "Could not record the order.");
}

#[tokio::test]
async fn test_checkout_clear_failure_is_reported_not_retried() {
    let api = Arc::new(MockApiService::new());
    api.fail_clear_cart(AppError::Api { status: 500, message: None });
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    let notice = last_notice(&mut app);
    assert_eq!(notice.title, "Cart not cleared");
    assert_eq!(api.count(|c| matches!(c, Call::SubmitOrder { .. })), 1);
    assert_eq!(api.count(|c| matches!(c, Call::ClearCart { .. })), 1);
}

#[tokio::test]
async fn test_checkout_double_submit_is_ignored() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.finalize_purchase();
    app.settle().await;

    assert_eq!(api.count(|c| matches!(c, Call::SubmitOrder { .. })), 1);
    assert_eq!(api.count(|c| matches!(c, Call::ClearCart { .. })), 1);
}

#[tokio::test]
async fn test_checkout_empty_cart_sends_nothing() {
    let api = Arc::new(MockApiService::new().with_cart(Vec::new()));
    let mut app = app_with(&api, Some("tok"));
    open_cart(&mut app).await;

    app.finalize_purchase();
    app.settle().await;

    assert_eq!(last_notice(&mut app).level, NoticeLevel::Error);
    assert_eq!(api.count(|c| matches!(c, Call::SubmitOrder { .. })), 0);
}

// ----- cart -----

#[tokio::test]
async fn test_clear_cart_requires_confirmation() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    app.clear_cart();
    assert_eq!(app.state.read().prompt, Some(Prompt::ConfirmClearCart));
    assert_eq!(api.count(|c| matches!(c, Call::ClearCart { .. })), 0);

    app.resolve_prompt(PromptChoice::Confirm);
    app.settle().await;

    assert!(api.calls().contains(&Call::ClearCart { token: None }));
    assert_eq!(app.state.read().cart.items.data().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_prompt_ignores_unoffered_choice() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    app.clear_cart();
    app.resolve_prompt(PromptChoice::GoToLogin);

    assert_eq!(app.state.read().prompt, Some(Prompt::ConfirmClearCart));
    assert_eq!(app.current_route(), Route::Cart);
}

#[tokio::test]
async fn test_remove_cart_item() {
    let api = Arc::new(MockApiService::new().with_cart(vec![
        cart_item(1, "Red Velvet", 9.9, 2),
        cart_item(2, "Chocolate Belga", 8.5, 1),
    ]));
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    app.remove_cart_item(1);
    app.settle().await;

    let state = app.state.read();
    let items = state.cart.items.data().expect("cart loaded");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 2);
    assert!((state.cart.total() - 8.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_cart_load_failure() {
    let api = Arc::new(MockApiService::new());
    api.fail_get_cart(AppError::Network("offline".into()));
    let mut app = app_with(&api, None);
    open_cart(&mut app).await;

    assert_eq!(app.state.read().cart.items.error(), Some("Could not load the cart items."));
    assert_eq!(api.count(|c| matches!(c, Call::GetCart)), 1);
}

// ----- home and search -----

#[tokio::test]
async fn test_quantity_never_below_one() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.start();
    app.settle().await;

    app.decrement(1);
    app.decrement(1);
    assert_eq!(app.state.read().home.quantity(1), 1);

    app.increment(1);
    app.increment(1);
    app.decrement(1);
    assert_eq!(app.state.read().home.quantity(1), 2);
}

#[tokio::test]
async fn test_add_to_cart_sends_selected_quantity() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.start();
    app.settle().await;

    app.increment(1);
    app.add_to_cart(1);
    app.settle().await;

    assert!(api.calls().contains(&Call::AddToCart { cupcake_id: 1, quantity: 2 }));
    let notice = last_notice(&mut app);
    assert_eq!(notice.message, "Added to cart: 2x Red Velvet");
    // The selector keeps its value.
    assert_eq!(app.state.read().home.quantity(1), 2);
}

#[tokio::test]
async fn test_add_to_cart_failure_notice() {
    let api = Arc::new(MockApiService::new());
    api.fail_add_to_cart(AppError::Api { status: 404, message: Some("Cupcake não encontrado".into()) });
    let mut app = app_with(&api, None);
    app.start();
    app.settle().await;

    app.add_to_cart(2);
    app.settle().await;

    let notice = last_notice(&mut app);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Cupcake não encontrado");
}

#[tokio::test]
async fn test_catalog_failure_then_retry() {
    let api = Arc::new(MockApiService::new());
    api.fail_get_cupcakes(AppError::Network("offline".into()));
    let mut app = app_with(&api, None);
    app.start();
    app.settle().await;
    assert_eq!(app.state.read().home.catalog.error(), Some("Could not load the cupcakes."));

    api.succeed_get_cupcakes();
    app.retry();
    app.settle().await;

    assert_eq!(app.state.read().home.catalog.data().map(Vec::len), Some(3));
    assert_eq!(api.count(|c| matches!(c, Call::GetCupcakes)), 2);
}

#[tokio::test]
async fn test_search_views() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.navigate(Route::Search, RouteParams::default());
    app.settle().await;
    assert_eq!(app.state.read().search.view(), SearchView::Prompt);

    app.set_search_query("  ");
    assert_eq!(app.state.read().search.view(), SearchView::Prompt);

    app.set_search_query("RED");
    match app.state.read().search.view() {
        SearchView::Results(items) => assert_eq!(items[0].name, "Red Velvet"),
        other => panic!("expected results, got {other:?}"),
    }

    app.set_search_query("pistache");
    assert_eq!(app.state.read().search.view(), SearchView::NoResults);
}

#[tokio::test]
async fn test_search_selection_focuses_home() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.start();
    app.settle().await;
    app.navigate(Route::Search, RouteParams::default());
    app.settle().await;

    app.set_search_query("limão");
    app.select_search_result(3);
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.navigator.current().route, Route::Home);
    assert_eq!(state.navigator.current().params.focus_cupcake_id, Some(3));
    assert_eq!(state.home.focused_index, Some(2));
    assert!(!state.navigator.is_mounted(Route::Search));
    drop(state);
    assert_eq!(api.count(|c| matches!(c, Call::GetCupcakes)), 3);
}

#[tokio::test]
async fn test_unmounted_screen_ignores_late_response() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);

    app.navigate(Route::Search, RouteParams::default());
    app.back();
    app.settle().await;

    assert_eq!(app.state.read().search.catalog.state(), &LoadState::Idle);
    assert_eq!(api.count(|c| matches!(c, Call::GetCupcakes)), 1);
}

// ----- auth -----

#[tokio::test]
async fn test_login_requires_both_fields() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.navigate(Route::Login, RouteParams::default());

    app.login("ana@example.com", "");
    app.settle().await;

    assert_eq!(last_notice(&mut app).message, "All fields must be filled in.");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_login_success_stores_token_and_goes_home() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.navigate(Route::Login, RouteParams::default());

    app.login("ana@example.com", "segredo");
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.session.token().as_deref(), Some("token-123"));
    assert_eq!(state.navigator.current().route, Route::Home);
    assert!(!state.navigator.is_mounted(Route::Login));
}

#[tokio::test]
async fn test_login_failure_messages() {
    let api = Arc::new(MockApiService::new());
    api.fail_login(AppError::Api { status: 401, message: None });
    let mut app = app_with(&api, None);
    app.navigate(Route::Login, RouteParams::default());

    app.login("ana@example.com", "errada");
    app.settle().await;
    assert_eq!(last_notice(&mut app).message, "Invalid email or password.");

    api.fail_login(AppError::Network("connection refused".into()));
    app.login("ana@example.com", "errada");
    app.settle().await;
    assert_eq!(last_notice(&mut app).message, "Could not reach the server.");
    assert!(!app.state.read().is_authenticated());
}

#[tokio::test]
async fn test_login_screen_redirects_when_logged_in() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));

    app.navigate(Route::Login, RouteParams::default());
    app.settle().await;

    assert_eq!(app.current_route(), Route::Profile);
    assert_eq!(app.state.read().profile.user.data().map(|u| u.name.clone()), Some("Ana".to_string()));
}

#[tokio::test]
async fn test_signup_success_goes_to_login() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);
    app.navigate(Route::Signup, RouteParams::default());

    app.signup(SignupForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        password: "segredo".into(),
        cep: "01001-000".into(),
        rua: "Rua A".into(),
        estado: "SP".into(),
        submitting: false,
    });
    app.settle().await;

    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(last_notice(&mut app).level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_signup_surfaces_server_error() {
    let api = Arc::new(MockApiService::new());
    api.fail_signup(AppError::Api { status: 400, message: Some("Email já cadastrado".into()) });
    let mut app = app_with(&api, None);
    app.navigate(Route::Signup, RouteParams::default());

    app.signup(SignupForm {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        password: "segredo".into(),
        cep: "01001-000".into(),
        rua: "Rua A".into(),
        estado: "SP".into(),
        submitting: false,
    });
    app.settle().await;

    assert_eq!(last_notice(&mut app).message, "Email já cadastrado");
    assert_eq!(app.current_route(), Route::Signup);
}

// ----- profile and history -----

#[tokio::test]
async fn test_profile_without_session_redirects_to_login() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);

    app.navigate(Route::Profile, RouteParams::default());
    app.settle().await;

    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(last_notice(&mut app).message, SESSION_NOT_FOUND);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_logout_replaces_profile_with_login() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    app.navigate(Route::Profile, RouteParams::default());
    app.settle().await;

    app.logout();
    app.settle().await;

    let state = app.state.read();
    assert!(!state.is_authenticated());
    assert_eq!(state.navigator.current().route, Route::Login);
    assert!(!state.navigator.is_mounted(Route::Profile));
    assert_eq!(state.profile.user.state(), &LoadState::Idle);
}

#[tokio::test]
async fn test_config_save_omits_blank_password() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    app.navigate(Route::Config, RouteParams::default());
    app.settle().await;
    assert_eq!(app.state.read().config.form.name, "Ana");

    app.edit_profile_form(|form| form.name = "Ana Maria".into());
    app.save_profile();
    app.settle().await;

    let update = api
        .calls()
        .into_iter()
        .find_map(|call| match call {
            Call::UpdateUser { update } => Some(update),
            _ => None,
        })
        .expect("update sent");
    assert_eq!(update.name, "Ana Maria");
    assert_eq!(update.password, None);
    assert_eq!(app.state.read().config.user.data().map(|u| u.name.clone()), Some("Ana Maria".into()));
}

#[tokio::test]
async fn test_save_profile_before_load_sends_nothing() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));

    app.edit_profile_form(|form| form.email = "new@example.com".into());
    app.save_profile();
    app.settle().await;

    assert_eq!(api.count(|c| matches!(c, Call::UpdateUser { .. })), 0);
    let notice = last_notice(&mut app);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, super::handlers::profile::PROFILE_NOT_LOADED);
    assert!(!app.state.read().config.saving);
}

#[tokio::test]
async fn test_save_profile_with_blank_field_sends_nothing() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    app.navigate(Route::Config, RouteParams::default());
    app.settle().await;

    app.edit_profile_form(|form| form.cep = "   ".into());
    app.save_profile();
    app.settle().await;

    assert_eq!(api.count(|c| matches!(c, Call::UpdateUser { .. })), 0);
    assert_eq!(last_notice(&mut app).message, crate::utils::validation::ALL_FIELDS_REQUIRED);
    assert!(!app.state.read().config.saving);
}

#[tokio::test]
async fn test_profile_image_change_and_removal() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));
    app.navigate(Route::Profile, RouteParams::default());
    app.settle().await;

    app.change_profile_image("/tmp/me.png");
    app.settle().await;
    assert_eq!(
        app.state.read().profile.user.data().and_then(|u| u.profile_image.clone()),
        Some("https://cdn.example.com/me.png".to_string())
    );

    app.remove_profile_image();
    app.settle().await;
    assert_eq!(app.state.read().profile.user.data().and_then(|u| u.profile_image.clone()), None);
}

#[tokio::test]
async fn test_history_without_session_fails_locally() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, None);

    app.navigate(Route::History, RouteParams::default());
    app.settle().await;

    assert_eq!(app.state.read().history.orders.error(), Some(NOT_AUTHENTICATED));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_history_loads_with_bearer() {
    let api = Arc::new(MockApiService::new());
    let mut app = app_with(&api, Some("tok"));

    app.navigate(Route::History, RouteParams::default());
    app.settle().await;

    assert_eq!(api.calls(), vec![Call::GetOrderHistory { token: "tok".into() }]);
    assert_eq!(app.state.read().history.orders.data().map(Vec::len), Some(1));
}
