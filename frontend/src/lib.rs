pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod identity;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    admin::{
        analytics::AdminAnalytics, login::AdminLogin, prizes::AdminPrizes, redeem::AdminRedeem,
        AdminHome,
    },
    home::Home,
    login::Login,
    spin::Spin,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/spin")]
    Spin,
    #[at("/admin")]
    Admin,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/prizes")]
    AdminPrizes,
    #[at("/admin/redeem")]
    AdminRedeem,
    #[at("/admin/analytics")]
    AdminAnalytics,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Spin => html! { <Spin /> },
        Route::Admin => html! { <AdminHome /> },
        Route::AdminLogin => html! { <AdminLogin /> },
        Route::AdminPrizes => html! { <AdminPrizes /> },
        Route::AdminRedeem => html! { <AdminRedeem /> },
        Route::AdminAnalytics => html! { <AdminAnalytics /> },
    }
}
